use leptos::prelude::*;

use crate::catalog::FAQS;
use crate::components::icons::{Icon, ICON_CARET_DOWN};
use crate::state::Disclosure;

/// FAQ accordion. Opening one answer collapses the previous one.
#[component]
pub fn Faq() -> impl IntoView {
    let disclosure = RwSignal::new(Disclosure::default());

    view! {
        <section id="faq" class="faq-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </div>
                <div class="faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, faq)| {
                            let is_open = move || disclosure.with(|d| d.is_open(index));
                            view! {
                                <div class=move || if is_open() { "faq-item open" } else { "faq-item" }>
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| disclosure.update(|d| d.toggle(index))
                                    >
                                        <span>{faq.question}</span>
                                        <Icon path=ICON_CARET_DOWN size="20" class="faq-caret" />
                                    </button>
                                    <Show when=is_open>
                                        <p class="faq-answer">{faq.answer}</p>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
