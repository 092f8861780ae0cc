//! Page-level load and delete flows with toast feedback
use super::crud;
use super::http::ApiError;
use super::toast::ToastService;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Run a (usually `try_join!`ed) batch of requests
///
/// `on_ok` receives the joined result once every request succeeded. On the
/// first failure the error is toasted and `on_err` resets the page data.
pub fn spawn_load<T, F>(
    loading: RwSignal<bool>,
    toast: ToastService,
    batch: F,
    on_ok: impl FnOnce(T) + 'static,
    on_err: impl FnOnce() + 'static,
) where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    loading.set(true);
    spawn_local(async move {
        match batch.await {
            Ok(data) => on_ok(data),
            Err(e) => {
                log::error!("page load failed: {}", e);
                if e.is_unauthorized() {
                    toast.error("Session expired, sign in again");
                } else {
                    toast.error(e.user_message("Failed to load data"));
                }
                on_err();
            }
        }
        loading.set(false);
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ask the browser for confirmation, DELETE the record, then run `on_deleted`
pub fn delete_with_confirm<T: AggregateRoot<Id = i64>>(
    id: i64,
    toast: ToastService,
    on_deleted: impl FnOnce() + 'static,
) {
    let prompt = format!("Delete this {}?", T::element_name().to_lowercase());
    if !confirm(&prompt) {
        return;
    }
    spawn_local(async move {
        match crud::delete::<T>(id).await {
            Ok(()) => {
                toast.success(format!("{} deleted", T::element_name()));
                on_deleted();
            }
            Err(e) => toast.error(e.user_message("Failed to delete")),
        }
    });
}
