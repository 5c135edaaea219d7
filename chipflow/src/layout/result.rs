//! Output of a flow layout pass.

use crate::primitives::{Point, Size};

use super::item::{PlacedItem, ReactionItem};

/// A wrapped reaction block.
///
/// Owned by the caller: keep it around across frames while the inputs are
/// unchanged, and run a new pass when they change.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult<T> {
    /// Extent of the whole arrangement.
    pub bounds: Size,
    /// One entry per input chip, in input order.
    pub placed: Vec<PlacedItem<T>>,
    pub row_count: usize,
    /// Extent of the last row, margins between chips included.
    pub last_row_width: f32,
    /// Width the chips were wrapped within.
    pub max_width: f32,
}

impl<T> LayoutResult<T> {
    #[inline]
    pub fn bounding_width(&self) -> f32 {
        self.bounds.width
    }

    #[inline]
    pub fn bounding_height(&self) -> f32 {
        self.bounds.height
    }

    /// Number of placed chips, always the number of input chips.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// True for a block with no chips (zero bounds).
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Placed chips in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedItem<T>> {
        self.placed.iter()
    }

    /// Chips on the given row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &PlacedItem<T>> {
        self.placed.iter().filter(move |p| p.row == row)
    }

    /// Index of the first chip containing `point`.
    pub fn hit_index(&self, point: Point) -> Option<usize> {
        self.placed.iter().position(|p| p.contains(point))
    }

    /// The first chip containing `point`, in input order.
    pub fn hit_test(&self, point: Point) -> Option<&ReactionItem<T>> {
        hit_test(&self.placed, point)
    }

    /// Hand the placements to the renderer, dropping the block metrics.
    pub fn into_placed(self) -> Vec<PlacedItem<T>> {
        self.placed
    }
}

impl<'a, T> IntoIterator for &'a LayoutResult<T> {
    type Item = &'a PlacedItem<T>;
    type IntoIter = std::slice::Iter<'a, PlacedItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.placed.iter()
    }
}

/// Route a pointer position to the chip under it.
///
/// Scans in input order, so if rounding ever makes two chips overlap the
/// earlier one wins.
pub fn hit_test<T>(placed: &[PlacedItem<T>], point: Point) -> Option<&ReactionItem<T>> {
    placed.iter().find(|p| p.contains(point)).map(|p| &p.item)
}
