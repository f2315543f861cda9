//! Ephemeral page state.
//!
//! Plain value types; components hold them in signals and mutate them with
//! `update`. Nothing here touches the DOM, so everything is testable natively.

mod copy;
mod disclosure;
mod drawer;
mod overlay;

pub use copy::{CopyFlag, Ticket};
pub use disclosure::Disclosure;
pub use drawer::NavDrawer;
pub use overlay::DetailOverlay;
