use leptos::prelude::*;

use crate::catalog::{Record, AGENTS};
use crate::components::RecordCard;

#[component]
pub fn Agents(on_select: Callback<Record>) -> impl IntoView {
    view! {
        <section id="agents" class="catalog-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        <span class="accent-blue">{AGENTS.len()}</span>
                        " Specialist Agents"
                    </h2>
                    <p class="section-subtitle">"Expert knowledge for every part of your stack."</p>
                </div>
                <div class="card-grid">
                    {AGENTS
                        .iter()
                        .map(|agent| view! {
                            <RecordCard record=Record::Agent(agent) on_select=on_select accent="blue" />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
