use leptos::prelude::*;

use crate::catalog::{Record, COMMANDS};
use crate::components::RecordCard;

#[component]
pub fn Commands(on_select: Callback<Record>) -> impl IntoView {
    view! {
        <section id="commands" class="catalog-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        <span class="accent-orange">{COMMANDS.len()}</span>
                        " Slash Commands"
                    </h2>
                    <p class="section-subtitle">
                        "From project kickoff to deployment. Every workflow covered."
                    </p>
                </div>
                <div class="card-grid">
                    {COMMANDS
                        .iter()
                        .map(|command| view! {
                            <RecordCard record=Record::Command(command) on_select=on_select accent="orange" />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
