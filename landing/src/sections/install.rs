use leptos::prelude::*;

use crate::components::CopyButton;
use crate::config::{HOST_CLI_DOCS_URL, HOST_CLI_NAME, INSTALL_COMMAND};

#[component]
pub fn InstallSection() -> impl IntoView {
    view! {
        <section id="install" class="install-section">
            <div class="container">
                <div class="install-box">
                    <h2 class="section-title">"Ready to Start?"</h2>
                    <p class="section-subtitle">"One command. That's it."</p>

                    <div class="install-command-box">
                        <code class="install-cmd">{INSTALL_COMMAND}</code>
                        <CopyButton text=INSTALL_COMMAND />
                    </div>

                    <p class="install-note">
                        "Works on macOS and Linux. Requires "
                        <a href=HOST_CLI_DOCS_URL target="_blank" rel="noopener noreferrer">
                            {HOST_CLI_NAME}
                        </a>
                        " to be installed."
                    </p>
                </div>
            </div>
        </section>
    }
}
