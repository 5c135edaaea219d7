//! Layout inputs and outputs for a single reaction chip.

use crate::error::{LayoutError, is_valid_extent};
use crate::primitives::{Point, Rect, Size};

/// A pre-measured reaction chip.
///
/// Width and height come from whatever measured the chip's label and icon;
/// `payload` is the reaction identity and is handed back untouched in
/// placements and hit results.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionItem<T> {
    pub width: f32,
    pub height: f32,
    pub payload: T,
}

impl<T> ReactionItem<T> {
    pub fn new(width: f32, height: f32, payload: T) -> Self {
        Self {
            width,
            height,
            payload,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), LayoutError> {
        if is_valid_extent(self.width) && is_valid_extent(self.height) {
            Ok(())
        } else {
            tracing::debug!(
                "rejecting reaction item {}: {}x{}",
                index,
                self.width,
                self.height
            );
            Err(LayoutError::InvalidInput {
                index,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A chip positioned inside the block.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem<T> {
    pub item: ReactionItem<T>,
    /// Left edge relative to the block origin.
    pub x: f32,
    /// Top edge relative to the block origin.
    pub y: f32,
    /// Zero-based row this chip was wrapped onto.
    pub row: usize,
}

impl<T> PlacedItem<T> {
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The chip's box in block coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.item.size())
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.rect().contains(point)
    }
}
