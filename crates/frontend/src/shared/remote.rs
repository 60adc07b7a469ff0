//! Glue between [`ApiClient`](super::api::ApiClient) calls and page state.
//!
//! Every list page loads through [`load_collection`] and every mutation goes
//! through [`run_mutation`]: one request, then a success toast and a re-fetch,
//! or an error toast.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::ApiError;
use super::collection::{CollectionRecord, CollectionView};
use super::notify::NotificationService;

/// Replaces the records of `collection` with the result of `request`.
pub fn load_collection<T, Fut>(
    collection: RwSignal<CollectionView<T>>,
    loading: RwSignal<bool>,
    notify: NotificationService,
    request: Fut,
) where
    T: CollectionRecord + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    loading.set(true);
    spawn_local(async move {
        match request.await {
            Ok(items) => {
                log::debug!("Loaded {} records", items.len());
                collection.update(|v| v.set_items(items));
            }
            Err(e) => {
                log::error!("Failed to load records: {}", e);
                notify.report(&e);
            }
        }
        loading.set(false);
    });
}

/// Runs one mutation; `on_success` usually closes a dialog and re-fetches.
pub fn run_mutation<Fut, F>(
    notify: NotificationService,
    busy: RwSignal<bool>,
    request: Fut,
    success_message: impl Into<String>,
    on_success: F,
) where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    F: FnOnce() + 'static,
{
    let success_message = success_message.into();
    busy.set(true);
    spawn_local(async move {
        let result = request.await;
        busy.set(false);
        match result {
            Ok(()) => {
                notify.success(success_message);
                on_success();
            }
            Err(e) => {
                log::error!("Mutation failed: {}", e);
                notify.report(&e);
            }
        }
    });
}
