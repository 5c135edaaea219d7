//! Chipflow: wrapping layout for reaction chips.
//!
//! Arranges pre-measured reaction chips into rows that fit a maximum width,
//! reports the block's bounding box, and maps pointer positions back to the
//! chip under them.
//!
//! # Usage
//!
//! ```
//! use chipflow::{FlowLayout, Point, ReactionItem};
//!
//! let items = vec![
//!     ReactionItem::new(30.0, 20.0, "like"),
//!     ReactionItem::new(30.0, 20.0, "fire"),
//!     ReactionItem::new(30.0, 20.0, "heart"),
//! ];
//! let result = FlowLayout::new()
//!     .row_margin(5.0)
//!     .column_margin(4.0)
//!     .layout(items, 65.0)
//!     .unwrap();
//!
//! assert_eq!(result.bounds.height, 48.0);
//! assert_eq!(result.hit_test(Point::new(5.0, 30.0)).map(|i| i.payload), Some("heart"));
//! ```

// Core primitives
pub mod config;
pub mod error;
pub mod primitives;

// Layout engine
pub mod layout;

// Re-export core types
pub use config::FlowConfig;
pub use error::LayoutError;
pub use primitives::{Point, Rect, Size};

// Layout exports
pub use layout::{
    ChipFrame, ChipMotion, ChipTransition, FlowLayout, LayoutMetrics, LayoutResult,
    MetricsTransition, PlacedItem, ReactionItem, TrailingFit, compute_bounds, hit_test,
    place_items,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<Point>();
        assert_send_sync::<Size>();
        assert_send_sync::<Rect>();
        assert_send_sync::<FlowConfig>();
        assert_send_sync::<LayoutError>();
        assert_send_sync::<FlowLayout>();
        assert_send_sync::<ReactionItem<u32>>();
        assert_send_sync::<PlacedItem<u32>>();
        assert_send_sync::<LayoutResult<u32>>();
        assert_send_sync::<TrailingFit>();
        assert_send_sync::<LayoutMetrics>();
        assert_send_sync::<MetricsTransition>();
        assert_send_sync::<ChipMotion<u32>>();
        assert_send_sync::<ChipFrame<'static, u32>>();
        assert_send_sync::<ChipTransition<u32>>();
    }
}
