//! Transient notifications (toasts).
//!
//! Every fetch and mutation reports its outcome here. Toasts disappear on
//! their own after [`TOAST_TIMEOUT_MS`] or when clicked.
//!
//! ```ignore
//! let notify = use_notify();
//! match api::delete_user(&client, &id).await {
//!     Ok(()) => notify.success("User deleted"),
//!     Err(e) => notify.report(&e),
//! }
//! ```

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::ApiError;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    /// Error toast for a failed call. Missing authentication is only logged.
    pub fn report(&self, err: &ApiError) {
        match err.user_message() {
            Some(text) => self.error(text),
            None => log::warn!("Request abandoned: {}", err),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|list| list.push(Notice { id, kind, text }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notify() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Toast stack, mounted once at the application root.
#[component]
pub fn Toasts() -> impl IntoView {
    let notify = use_notify();

    view! {
        <div class="toast-stack">
            <For
                each=move || notify.notices.get()
                key=|n| n.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast--success",
                        NoticeKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| notify.dismiss(id)>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
