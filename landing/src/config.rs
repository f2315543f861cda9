//! Compile-time site configuration.
//!
//! Everything the page needs to know about the product lives here so copy,
//! links and timings have a single source of truth. There is no runtime
//! configuration: the page is a static artifact.

use std::time::Duration;

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const PRODUCT_NAME: &str = "Preclaude";

/// Name of the host CLI the product extends.
pub const HOST_CLI_NAME: &str = "Claude Code";

pub const REPO_URL: &str = "https://github.com/weareprecode/preclaude";
pub const HOST_CLI_DOCS_URL: &str = "https://docs.anthropic.com/en/docs/claude-code";
pub const COMPANY_URL: &str = "https://precode.co";

/// The exact string written to the clipboard by the install copy button.
pub const INSTALL_COMMAND: &str =
    "curl -fsSL https://raw.githubusercontent.com/weareprecode/preclaude/main/install-remote.sh | bash";

/// How long a copy button shows its "copied" glyph.
pub const COPY_RESET: Duration = Duration::from_millis(2000);

/// Shorter window for the inline copy button on code examples.
pub const COPY_RESET_SHORT: Duration = Duration::from_millis(1500);

/// Class put on `<body>` while the detail modal is open.
pub const BODY_SCROLL_LOCK_CLASS: &str = "modal-open";

/// Log level for the browser console logger.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_prefixed() {
        assert!(VERSION.starts_with('v'));
        assert!(VERSION.len() > 1);
    }

    #[test]
    fn install_command_pipes_remote_script_to_bash() {
        assert!(INSTALL_COMMAND.starts_with("curl -fsSL https://"));
        assert!(INSTALL_COMMAND.ends_with("| bash"));
        assert!(INSTALL_COMMAND.is_ascii());
    }

    #[test]
    fn copy_reset_is_two_seconds() {
        assert_eq!(COPY_RESET.as_millis(), 2000);
        assert!(COPY_RESET_SHORT < COPY_RESET);
    }
}
