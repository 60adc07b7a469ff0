//! Authenticated access to the MedBankr backends.
//!
//! Every data-bearing screen goes through [`ApiClient`]: it carries the
//! session token explicitly, attaches it as a bearer header, and normalises
//! the `{status, data, message}` envelope into `Result<T, ApiError>`.
//!
//! ```ignore
//! let client = use_api();
//! spawn_local(async move {
//!     match client.get::<Vec<User>>(Backend::Core, "/admin/users").await {
//!         Ok(users) => view.update(|v| v.set_items(users)),
//!         Err(e) => notify.report(&e),
//!     }
//! });
//! ```

pub mod client;
pub mod error;

pub use client::{decode_response, use_api, ApiClient, Method};
pub use error::ApiError;
