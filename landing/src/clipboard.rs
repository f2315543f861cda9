//! Browser clipboard glue.
//!
//! The write is fire-and-forget: callers learn about synchronous failures
//! (no window) through the returned `Result`, while a rejected promise is
//! only logged. The UI never branches on either.

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("no browser window available for clipboard access")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Start writing `text` to the system clipboard.
pub fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let promise = window.navigator().clipboard().write_text(text);

    leptos::task::spawn_local(async move {
        if let Err(reason) = JsFuture::from(promise).await {
            let err = ClipboardError::Rejected(
                reason
                    .as_string()
                    .unwrap_or_else(|| format!("{reason:?}")),
            );
            log::warn!("{err}");
        }
    });

    Ok(())
}
