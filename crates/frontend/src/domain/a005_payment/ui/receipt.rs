use crate::shared::download::{download_bytes, PDF_MIME};
use crate::shared::http;
use crate::shared::toast::ToastService;
use contracts::domain::a005_payment::Payment;
use leptos::task::spawn_local;

/// Fetch the PDF receipt of a stored payment and hand it to the browser
pub fn download_receipt(id: i64, toast: ToastService) {
    spawn_local(async move {
        let bytes = match http::get_bytes(&Payment::receipt_path(id)).await {
            Ok(bytes) => bytes,
            Err(e) => {
                toast.error(e.user_message("Failed to download receipt"));
                return;
            }
        };
        match download_bytes(&bytes, &Payment::receipt_file_name(id), PDF_MIME) {
            Ok(()) => log::debug!("receipt {} downloaded ({} bytes)", id, bytes.len()),
            Err(e) => {
                log::error!("receipt {} download failed: {}", id, e);
                toast.error("Failed to download receipt");
            }
        }
    });
}
