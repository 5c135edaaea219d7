//! Reaction block layout.
//!
//! ```text
//! measured chips -> FlowLayout::layout() -> LayoutResult -> draw / hit_test
//! ```
//!
//! The caller measures chips, runs one pass whenever they change, and keeps
//! the result for drawing and pointer routing until the next pass.

pub mod flow;
pub mod item;
pub mod result;
pub mod trailing;
pub mod transition;

pub use flow::{FlowLayout, compute_bounds, place_items};
pub use item::{PlacedItem, ReactionItem};
pub use result::{LayoutResult, hit_test};
pub use trailing::TrailingFit;
pub use transition::{ChipFrame, ChipMotion, ChipTransition, LayoutMetrics, MetricsTransition};
