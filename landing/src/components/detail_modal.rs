//! Detail modal for a selected command or agent.
//!
//! Closes on the close button, a backdrop click or `Escape`. While open the
//! page body carries [`BODY_SCROLL_LOCK_CLASS`] so the page behind it does
//! not scroll.

use leptos::prelude::*;

use super::copy_button::CopyButton;
use super::icons::{Icon, ICON_X};
use crate::catalog::{DetailSection, Record};
use crate::config::{BODY_SCROLL_LOCK_CLASS, COPY_RESET_SHORT};

#[component]
pub fn DetailModal(
    #[prop(into)] selected: Signal<Option<Record>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.with_untracked(Option::is_some) {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    Effect::new(move || {
        set_scroll_lock(selected.with(Option::is_some));
    });
    on_cleanup(|| set_scroll_lock(false));

    view! {
        {move || selected.get().map(|record| view! {
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal-container">
                <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                    <div class="modal-header">
                        <code id="modal-title" class="modal-title">{record.name()}</code>
                        <button
                            class="modal-close"
                            aria-label="Close modal"
                            on:click=move |_| on_close.run(())
                        >
                            <Icon path=ICON_X />
                        </button>
                    </div>
                    <div class="modal-body">
                        {record.sections().into_iter().map(render_section).collect_view()}
                    </div>
                </div>
            </div>
        })}
    }
}

fn render_section(section: DetailSection) -> AnyView {
    match section {
        DetailSection::Description(text) => {
            view! { <p class="modal-description">{text}</p> }.into_any()
        }
        DetailSection::Bullets { heading, items } => view! {
            <div class="modal-section">
                <h4 class="modal-heading">{heading}</h4>
                <ul class="modal-list">
                    {items.iter().map(|item| view! {
                        <li>
                            <span class="modal-bullet">"•"</span>
                            <span>{*item}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        DetailSection::Numbered { heading, items } => view! {
            <div class="modal-section">
                <h4 class="modal-heading">{heading}</h4>
                <ol class="modal-list">
                    {items.iter().enumerate().map(|(i, item)| view! {
                        <li>
                            <span class="modal-step">{format!("{}.", i + 1)}</span>
                            <span>{*item}</span>
                        </li>
                    }).collect_view()}
                </ol>
            </div>
        }
        .into_any(),
        DetailSection::Code { heading, code } => view! {
            <div class="modal-section">
                <h4 class="modal-heading">{heading}</h4>
                <div class="modal-code-box">
                    <pre class="modal-code"><code>{code}</code></pre>
                    <CopyButton
                        text=code
                        reset=COPY_RESET_SHORT
                        class="code-copy-btn"
                        icon_size="16"
                    />
                </div>
            </div>
        }
        .into_any(),
        DetailSection::CodeLines { heading, lines } => view! {
            <div class="modal-section">
                <h4 class="modal-heading">{heading}</h4>
                <div class="modal-code">
                    {lines.iter().map(|line| view! {
                        <code class="modal-code-line">{*line}</code>
                    }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let classes = body.class_list();
    let result = if locked {
        classes.add_1(BODY_SCROLL_LOCK_CLASS)
    } else {
        classes.remove_1(BODY_SCROLL_LOCK_CLASS)
    };
    if result.is_err() {
        log::warn!("could not toggle body scroll lock");
    }
}
