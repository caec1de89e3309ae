//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod back_button;
pub mod cards;
pub mod emergency_panel;
pub mod header;
pub mod icon;
pub mod toast;

pub use back_button::BackButton;
pub use cards::{ExternalCard, Notice, NoticeTone, SectionTitle};
pub use emergency_panel::{EmergencyPanel, HotlineList};
pub use header::Header;
pub use icon::Glyph;
pub use toast::Toast;
