//! Bridge to the payment widget the host page loads as
//! `window.MedbankrCheckout`.
//!
//! `open(options, on_success, on_close)` shows the widget; `on_success`
//! receives `{ reference }` once the payment goes through. The widget may
//! call `on_close` after `on_success`, so only the first callback counts.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = MedbankrCheckout, js_name = open, catch)]
    fn checkout_open(
        options: &JsValue,
        on_success: &JsValue,
        on_close: &JsValue,
    ) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    pub email: String,
    /// Minor units (kobo).
    pub amount: u64,
    pub currency: String,
    pub plan_id: String,
    pub plan_name: String,
}

impl CheckoutOptions {
    pub fn new(email: &str, plan_id: &str, plan_name: &str, amount_naira: f64) -> Self {
        Self {
            email: email.trim().to_string(),
            amount: to_kobo(amount_naira),
            currency: "NGN".to_string(),
            plan_id: plan_id.to_string(),
            plan_name: plan_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CheckoutSuccess {
    #[serde(alias = "trxref", alias = "transaction")]
    reference: String,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Payment widget is not available: {0}")]
    Unavailable(String),
    #[error("Invalid checkout data: {0}")]
    Data(String),
}

pub fn to_kobo(amount_naira: f64) -> u64 {
    (amount_naira.max(0.0) * 100.0).round() as u64
}

type Outcome = Option<String>;

/// Opens the widget and waits for it. `Ok(None)` means the user closed it
/// without paying.
pub async fn open_checkout(options: &CheckoutOptions) -> Result<Outcome, CheckoutError> {
    let options = serde_wasm_bindgen::to_value(options).map_err(|e| CheckoutError::Data(e.to_string()))?;

    let (tx, rx) = oneshot::channel::<Outcome>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_success = tx.clone();
    let on_success = Closure::wrap(Box::new(move |response: JsValue| {
        let reference = serde_wasm_bindgen::from_value::<CheckoutSuccess>(response)
            .map(|r| r.reference)
            .map_err(|e| log::error!("Unexpected checkout response: {}", e))
            .ok();
        if let Some(sender) = tx_success.borrow_mut().take() {
            let _ = sender.send(reference);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let tx_close = tx;
    let on_close = Closure::wrap(Box::new(move || {
        if let Some(sender) = tx_close.borrow_mut().take() {
            let _ = sender.send(None);
        }
    }) as Box<dyn FnMut()>);

    checkout_open(&options, on_success.as_ref(), on_close.as_ref())
        .map_err(|e| CheckoutError::Unavailable(format!("{:?}", e)))?;

    // the widget owns the callbacks from here on
    on_success.forget();
    on_close.forget();

    Ok(rx.await.unwrap_or(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kobo() {
        assert_eq!(to_kobo(2500.0), 250_000);
        assert_eq!(to_kobo(19.99), 1_999);
        assert_eq!(to_kobo(-5.0), 0);
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let options = CheckoutOptions::new(" ada@medbankr.com ", "p1", "Family", 4_500.0);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["email"], "ada@medbankr.com");
        assert_eq!(json["planId"], "p1");
        assert_eq!(json["amount"], 450_000);
    }
}
