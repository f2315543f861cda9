// Preclaude landing page sections
// Built by Precode (c)2025

mod agents;
mod commands;
mod console_banner;
mod faq;
mod footer;
mod hero;
mod install;
mod nav;
mod ralph;

pub use agents::Agents;
pub use commands::Commands;
pub use console_banner::{banner, ConsoleBanner};
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use install::InstallSection;
pub use nav::Nav;
pub use ralph::Ralph;
