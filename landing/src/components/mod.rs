//! Reusable building blocks shared by the page sections.

mod copy_button;
mod detail_modal;
pub mod icons;
mod record_card;

pub use copy_button::CopyButton;
pub use detail_modal::DetailModal;
pub use icons::Icon;
pub use record_card::RecordCard;
