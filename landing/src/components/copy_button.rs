use leptos::prelude::*;
use std::time::Duration;

use super::icons::{Icon, ICON_CHECK, ICON_COPY};
use crate::clipboard;
use crate::config::COPY_RESET;
use crate::state::CopyFlag;

/// Copies a fixed string and flashes a check mark for `reset`.
///
/// Clicking again inside the window cancels the pending reset and starts a
/// new one, so only one timer is ever armed.
#[component]
pub fn CopyButton(
    text: &'static str,
    #[prop(default = COPY_RESET)] reset: Duration,
    #[prop(default = "copy-btn")] class: &'static str,
    #[prop(default = "20")] icon_size: &'static str,
) -> impl IntoView {
    let flag = RwSignal::new(CopyFlag::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let copy = move |_| {
        let write = clipboard::write_text(text);
        let Some(ticket) = flag.try_update(|f| f.activate(write)) else {
            return;
        };

        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                flag.try_update(|f| f.expire(ticket));
            },
            reset,
        );
        pending.set_value(handle.ok());
    };

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <button
            class=move || if flag.with(CopyFlag::is_copied) { format!("{class} copied") } else { class.to_string() }
            on:click=copy
            aria-label="Copy to clipboard"
        >
            {move || {
                if flag.with(CopyFlag::is_copied) {
                    view! { <Icon path=ICON_CHECK size=icon_size class="icon-ok" /> }.into_any()
                } else {
                    view! { <Icon path=ICON_COPY size=icon_size class="icon-copy" /> }.into_any()
                }
            }}
        </button>
    }
}
