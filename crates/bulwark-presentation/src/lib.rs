//! # bulwark-presentation
//!
//! Score → visual tier, fill/border colors, opacity, and percentage label.

pub mod mapper;
pub mod style;
pub mod tier;

pub use mapper::{score_to_color, score_to_label, PresentationMapper};
pub use style::NodeStyle;
pub use tier::DefenseTier;
