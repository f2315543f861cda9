//! Greeting for developers who open the devtools console.

use leptos::prelude::*;

use crate::catalog::{AGENTS, COMMANDS};
use crate::config::{INSTALL_COMMAND, REPO_URL, VERSION};

fn ascii_logo() -> String {
    format!(
        r#"
 ___  ___ ___ ___ _      _  _   _ ___  ___
| _ \| _ \ __/ __| |    /_\| | | |   \| __|
|  _/|   / _| (__| |__ / _ \ |_| | |) | _|
|_|  |_|_\___\___|____/_/ \_\___/|___/|___|

  {VERSION} | {commands} commands | {agents} agents
"#,
        commands = COMMANDS.len(),
        agents = AGENTS.len(),
    )
}

/// Full console message: logo, install line, repository.
pub fn banner() -> String {
    format!(
        "{}\n  install: {INSTALL_COMMAND}\n  source:  {REPO_URL}\n",
        ascii_logo()
    )
}

/// Prints the banner once on mount. Renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        log::info!("{}", banner());
    });

    view! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_carries_version_and_install_line() {
        let text = banner();
        assert!(text.contains(VERSION));
        assert!(text.contains(INSTALL_COMMAND));
        assert!(text.contains(REPO_URL));
    }

    #[test]
    fn banner_counts_follow_catalog() {
        let text = banner();
        assert!(text.contains(&format!("{} commands", COMMANDS.len())));
        assert!(text.contains(&format!("{} agents", AGENTS.len())));
    }
}
