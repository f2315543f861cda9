use leptos::prelude::*;

use crate::catalog::summary_line;
use crate::components::icons::{Icon, ICON_GIT_BRANCH, ICON_LIGHTNING, ICON_TERMINAL};
use crate::config::{HOST_CLI_NAME, REPO_URL};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <Icon path=ICON_TERMINAL size="16" />
                        "Open Source CLI Tool"
                    </div>
                    <h1 class="hero-title">
                        "Supercharge Your "
                        <span class="hero-title-accent">{HOST_CLI_NAME}</span>
                    </h1>
                    <p class="hero-description">{summary_line()}</p>
                    <div class="hero-actions">
                        <a href="#install" class="btn btn-primary">
                            <Icon path=ICON_LIGHTNING size="20" />
                            "Get Started"
                        </a>
                        <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                            <Icon path=ICON_GIT_BRANCH size="20" />
                            "View on GitHub"
                        </a>
                    </div>
                </div>
                <Terminal />
            </div>
        </section>
    }
}

/// Mock Ralph session in an editor terminal.
#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"~/my-saas"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"claude"</span>
                </div>
                <div class="terminal-line">
                    <span class="terminal-prompt">">"</span>
                    <span class="terminal-command">"/full-build"</span>
                </div>
                <div class="terminal-output muted">"[prd] Writing tasks/prd-my-saas.md"</div>
                <div class="terminal-output muted">"[ralph] Converted 12 user stories to prd.json"</div>

                <div class="terminal-output highlight" style="margin-top: 8px;">
                    "Ralph iteration 3/20: US-003 Team invitations"
                </div>
                <div class="terminal-output">"  typecheck"</div>
                <div class="terminal-output">"  lint"</div>
                <div class="terminal-output">"  tests (14 passed)"</div>
                <div class="terminal-output success">"✓ feat(teams): add invitation flow"</div>

                <div class="terminal-output success" style="margin-top: 8px;">
                    "3 of 12 stories complete, moving to US-004"
                </div>
            </div>
        </div>
    }
}
