use leptos::prelude::*;

use crate::components::icons::{Icon, ICON_ROBOT};

/// One pass of the build loop, in order.
const LOOP_STEPS: &[&str] = &[
    "Reads prd.json for user stories",
    "Implements one story at a time",
    "Runs typecheck, lint, and tests",
    "Commits and moves to next story",
];

#[component]
pub fn Ralph() -> impl IntoView {
    view! {
        <section id="features" class="ralph-section">
            <div class="container">
                <div class="ralph-grid">
                    <div class="ralph-visual">
                        <Icon path=ICON_ROBOT size="120" class="ralph-icon" />
                    </div>
                    <div class="ralph-content">
                        <h2 class="section-title">
                            "Meet "
                            <span class="accent-green">"Ralph"</span>
                        </h2>
                        <p class="section-subtitle">"Your Autonomous Builder"</p>
                        <p class="ralph-description">
                            "Ralph takes your PRD and builds it story by story, committing as it goes. "
                            "No hand-holding required. Just set iterations and let Ralph work."
                        </p>
                        <ul class="ralph-steps">
                            {LOOP_STEPS
                                .iter()
                                .map(|step| view! {
                                    <li class="ralph-step">
                                        <Icon path=ICON_ROBOT size="20" class="accent-green" />
                                        <span>{*step}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
