use leptos::prelude::*;

use crate::catalog::Record;

/// Grid card for a command or agent. Activating it hands the record to
/// `on_select`; the owner decides what to show.
#[component]
pub fn RecordCard(
    record: Record,
    on_select: Callback<Record>,
    #[prop(default = "orange")] accent: &'static str,
) -> impl IntoView {
    view! {
        <button
            class=format!("record-card record-card-{accent}")
            aria-haspopup="dialog"
            on:click=move |_| on_select.run(record)
        >
            <code class="record-name">{record.name()}</code>
            <p class="record-desc">{record.short_description()}</p>
            <span class="record-more">"View details →"</span>
        </button>
    }
}
