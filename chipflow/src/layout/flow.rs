//! Flow layout - wraps reaction chips into rows like CSS `flex-wrap: wrap`.
//!
//! Chips are laid out left to right until the next one would cross the
//! maximum width, then wrap to the next row. A chip wider than the maximum
//! width gets a row of its own and is never split.
//!
//! Bounds and placements come out of the same wrapping pass, so the block
//! size used for scrolling and hit-testing always matches what is drawn.

use crate::config::FlowConfig;
use crate::error::{LayoutError, check_max_width};
use crate::primitives::Size;

use super::item::{PlacedItem, ReactionItem};
use super::result::LayoutResult;

// =========================================================================
// FlowLayout
// =========================================================================

/// Reaction block layout engine.
///
/// Holds only spacing configuration; every call is a fresh, side-effect-free
/// pass over the items it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowLayout {
    config: FlowConfig,
}

impl FlowLayout {
    /// Create a layout with default chip gaps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layout from a loaded config.
    pub fn with_config(config: FlowConfig) -> Self {
        Self { config }
    }

    /// Set the horizontal gap between chips in a row.
    pub fn row_margin(mut self, margin: f32) -> Self {
        self.config.row_margin = margin;
        self
    }

    /// Set the vertical gap below each row.
    pub fn column_margin(mut self, margin: f32) -> Self {
        self.config.column_margin = margin;
        self
    }

    /// Spacing this layout wraps with.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Wrap `items` into rows no wider than `max_width`.
    pub fn layout<T>(
        &self,
        items: impl IntoIterator<Item = ReactionItem<T>>,
        max_width: f32,
    ) -> Result<LayoutResult<T>, LayoutError> {
        let items: Vec<ReactionItem<T>> = items.into_iter().collect();
        let pass = self.wrap(&items, max_width)?;

        let placed = items
            .into_iter()
            .zip(pass.slots)
            .map(|(item, slot)| PlacedItem {
                item,
                x: slot.x,
                y: slot.y,
                row: slot.row,
            })
            .collect();

        Ok(LayoutResult {
            bounds: pass.bounds,
            placed,
            row_count: pass.row_count,
            last_row_width: pass.last_row_width,
            max_width: pass.max_width,
        })
    }

    /// Bounding box of the wrapped arrangement.
    pub fn compute_bounds<T>(
        &self,
        items: &[ReactionItem<T>],
        max_width: f32,
    ) -> Result<Size, LayoutError> {
        Ok(self.wrap(items, max_width)?.bounds)
    }

    /// Placement of every chip, in input order.
    pub fn place_items<T: Clone>(
        &self,
        items: &[ReactionItem<T>],
        max_width: f32,
    ) -> Result<Vec<PlacedItem<T>>, LayoutError> {
        let pass = self.wrap(items, max_width)?;
        Ok(items
            .iter()
            .zip(pass.slots)
            .map(|(item, slot)| PlacedItem {
                item: item.clone(),
                x: slot.x,
                y: slot.y,
                row: slot.row,
            })
            .collect())
    }

    /// Calculate the total height needed for a given width.
    pub fn height_for_width<T>(
        &self,
        items: &[ReactionItem<T>],
        available_width: f32,
    ) -> Result<f32, LayoutError> {
        Ok(self.compute_bounds(items, available_width)?.height)
    }

    /// The single wrapping pass shared by every public operation.
    fn wrap<T>(
        &self,
        items: &[ReactionItem<T>],
        max_width: f32,
    ) -> Result<WrapPass, LayoutError> {
        self.config.validate()?;
        let max_width = check_max_width(max_width)?;

        let mut max_height = 0.0f32;
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
            max_height = max_height.max(item.height);
        }

        if items.is_empty() {
            return Ok(WrapPass::empty(max_width));
        }

        // Rows share one pitch so every chip in a row starts at the same y
        // and the bounding height is an exact multiple of it.
        let pitch = max_height + self.config.column_margin;

        let mut slots = Vec::with_capacity(items.len());
        let mut row = 0usize;
        let mut row_len = 0usize;
        let mut row_width = 0.0f32;
        let mut widest = 0.0f32;

        for (index, item) in items.iter().enumerate() {
            let mut x = if row_len > 0 {
                row_width + self.config.row_margin
            } else {
                0.0
            };

            // Check if we need to wrap to next row
            if row_len > 0 && x + item.width > max_width {
                row += 1;
                row_len = 0;
                x = 0.0;
            }

            if row_len == 0 && item.width > max_width {
                tracing::debug!(
                    "reaction item {} ({}) wider than max width {}, placing alone",
                    index,
                    item.width,
                    max_width
                );
            }

            slots.push(Slot {
                x,
                y: row as f32 * pitch,
                row,
            });

            row_width = x + item.width;
            row_len += 1;
            widest = widest.max(row_width);
        }

        let row_count = row + 1;
        let bounds = Size::new(widest, row_count as f32 * pitch);

        tracing::trace!(
            "flow layout: {} items in {} rows, bounds {}x{}",
            items.len(),
            row_count,
            bounds.width,
            bounds.height
        );

        Ok(WrapPass {
            slots,
            bounds,
            row_count,
            last_row_width: row_width,
            max_width,
        })
    }
}

/// Position assigned to one chip by the wrapping pass.
#[derive(Debug, Clone, Copy)]
struct Slot {
    x: f32,
    y: f32,
    row: usize,
}

/// Everything the wrapping pass computes, minus the items themselves.
#[derive(Debug)]
struct WrapPass {
    slots: Vec<Slot>,
    bounds: Size,
    row_count: usize,
    last_row_width: f32,
    max_width: f32,
}

impl WrapPass {
    fn empty(max_width: f32) -> Self {
        Self {
            slots: Vec::new(),
            bounds: Size::ZERO,
            row_count: 0,
            last_row_width: 0.0,
            max_width,
        }
    }
}

// =========================================================================
// Free functions
// =========================================================================

/// Bounding box of `items` wrapped within `max_width`.
pub fn compute_bounds<T>(
    items: &[ReactionItem<T>],
    max_width: f32,
    row_margin: f32,
    column_margin: f32,
) -> Result<Size, LayoutError> {
    FlowLayout::with_config(FlowConfig::new(row_margin, column_margin))
        .compute_bounds(items, max_width)
}

/// Top-left offset of every chip in `items`, in input order.
pub fn place_items<T: Clone>(
    items: &[ReactionItem<T>],
    max_width: f32,
    row_margin: f32,
    column_margin: f32,
) -> Result<Vec<PlacedItem<T>>, LayoutError> {
    FlowLayout::with_config(FlowConfig::new(row_margin, column_margin))
        .place_items(items, max_width)
}

// =========================================================================
// Tests
// =========================================================================
