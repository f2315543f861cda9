use leptos::prelude::*;

use crate::components::icons::{Icon, ICON_LIST, ICON_TERMINAL, ICON_X};
use crate::config::{PRODUCT_NAME, REPO_URL, VERSION};
use crate::state::NavDrawer;

/// In-page anchors shared by the inline bar and the mobile drawer.
const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("Commands", "#commands"),
    ("Agents", "#agents"),
    ("FAQ", "#faq"),
    ("Install", "#install"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let drawer = RwSignal::new(NavDrawer::default());
    let is_open = move || drawer.with(NavDrawer::is_open);
    let close = move |_| drawer.update(NavDrawer::close);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <span class="nav-logo">
                        <Icon path=ICON_TERMINAL size="22" />
                    </span>
                    <span class="nav-title">{PRODUCT_NAME}</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                    <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="nav-link">
                        "GitHub"
                    </a>
                    <a href="#install" class="nav-cta">"Install"</a>
                </div>
                <button
                    class=move || if is_open() { "nav-menu-btn active" } else { "nav-menu-btn" }
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| drawer.update(NavDrawer::toggle)
                >
                    {move || {
                        if is_open() {
                            view! { <Icon path=ICON_X size="22" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_LIST size="22" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile drawer
            <Show when=is_open>
                <div class="nav-drawer-backdrop" on:click=close></div>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">
                        {NAV_LINKS
                            .iter()
                            .map(|(label, href)| view! {
                                <a href=*href class="drawer-link" on:click=close>{*label}</a>
                            })
                            .collect_view()}
                        <a
                            href=REPO_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="drawer-link"
                            on:click=close
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
