//! Preclaude landing page.
//!
//! A single-page Leptos CSR app. The catalog tables and the UI state types
//! are plain Rust and unit-tested natively; components only wire them to the
//! DOM.

pub mod catalog;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod sections;
pub mod state;

use leptos::prelude::*;

use catalog::Record;
use components::DetailModal;
use sections::*;
use state::DetailOverlay;

/// Page root. Owns the detail overlay so any card can open it.
#[component]
pub fn App() -> impl IntoView {
    let overlay = RwSignal::new(DetailOverlay::default());
    let on_select = Callback::new(move |record: Record| overlay.update(|o| o.open(record)));
    let on_close = Callback::new(move |_: ()| overlay.update(DetailOverlay::close));
    let selected = Signal::derive(move || overlay.with(DetailOverlay::selected));

    view! {
        <ConsoleBanner />
        <Nav />
        <main>
            <Hero />
            <Ralph />
            <Commands on_select=on_select />
            <Agents on_select=on_select />
            <Faq />
            <InstallSection />
        </main>
        <Footer />
        <DetailModal selected=selected on_close=on_close />
    }
}
