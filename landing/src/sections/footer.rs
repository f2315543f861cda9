use leptos::prelude::*;

use crate::components::icons::{Icon, ICON_ARROW_SQUARE_OUT, ICON_GIT_BRANCH, ICON_TERMINAL};
use crate::config::{COMPANY_URL, PRODUCT_NAME, REPO_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <Icon path=ICON_TERMINAL size="20" />
                    <span class="footer-title">{PRODUCT_NAME}</span>
                    <span class="footer-license">"MIT License"</span>
                </div>
                <div class="footer-links">
                    <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                        <Icon path=ICON_GIT_BRANCH size="16" />
                        "GitHub"
                        <Icon path=ICON_ARROW_SQUARE_OUT size="12" />
                    </a>
                    <a href=COMPANY_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                        "Built by Precode"
                    </a>
                </div>
            </div>
        </footer>
    }
}
