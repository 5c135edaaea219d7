//! Animating a reaction block between two layout passes.
//!
//! When reactions are added or removed the block changes size and chips
//! slide to their new slots. A renderer keeps a `MetricsTransition` for the
//! block and a `ChipTransition` for the chips, and samples both with its
//! animation factor each frame.

use crate::error::LayoutError;
use crate::primitives::Rect;

use super::result::LayoutResult;

/// Size-related numbers of a laid-out block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutMetrics {
    pub width: f32,
    pub height: f32,
    pub last_row_width: f32,
    /// 1.0 when the trailing badge sits on its own line, 0.0 when inline.
    pub trailing_expand: f32,
}

impl LayoutMetrics {
    /// Linear interpolation; `factor` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Self, factor: f32) -> Self {
        let t = factor.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            width: mix(self.width, other.width),
            height: mix(self.height, other.height),
            last_row_width: mix(self.last_row_width, other.last_row_width),
            trailing_expand: mix(self.trailing_expand, other.trailing_expand),
        }
    }
}

impl<T> LayoutResult<T> {
    /// Metrics of this block with a trailing badge of `trailing_width`.
    pub fn metrics(
        &self,
        trailing_width: f32,
        force_expand: bool,
    ) -> Result<LayoutMetrics, LayoutError> {
        let fit = self.fit_trailing(trailing_width, force_expand)?;
        Ok(LayoutMetrics {
            width: fit.width,
            height: self.bounds.height,
            last_row_width: self.last_row_width,
            trailing_expand: if fit.expands { 1.0 } else { 0.0 },
        })
    }
}

// =========================================================================
// Block metrics
// =========================================================================

/// An in-flight change from one set of metrics to another.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsTransition {
    pub from: LayoutMetrics,
    pub to: LayoutMetrics,
}

impl MetricsTransition {
    pub fn new(from: LayoutMetrics, to: LayoutMetrics) -> Self {
        Self { from, to }
    }

    /// A transition that is already at rest.
    pub fn settled(metrics: LayoutMetrics) -> Self {
        Self {
            from: metrics,
            to: metrics,
        }
    }

    /// Metrics at animation progress `factor`.
    pub fn at(&self, factor: f32) -> LayoutMetrics {
        self.from.lerp(&self.to, factor)
    }

    pub fn is_settled(&self) -> bool {
        self.from == self.to
    }

    /// Start a new transition from wherever the current one is at `factor`.
    pub fn retarget(&mut self, factor: f32, to: LayoutMetrics) {
        self.from = self.at(factor);
        self.to = to;
    }

    /// Jump to the target and return it.
    pub fn finish(&mut self) -> LayoutMetrics {
        self.from = self.to;
        self.to
    }
}

// =========================================================================
// Per-chip motion
// =========================================================================

/// Where one chip was and where it is going.
///
/// `from` is `None` for a chip that is appearing, `to` is `None` for one that
/// is being removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipMotion<T> {
    pub payload: T,
    pub from: Option<Rect>,
    pub to: Option<Rect>,
}

impl<T> ChipMotion<T> {
    pub fn is_appearing(&self) -> bool {
        self.from.is_none()
    }

    pub fn is_removing(&self) -> bool {
        self.to.is_none()
    }

    /// Box and opacity at animation progress `factor`.
    pub fn at(&self, factor: f32) -> ChipFrame<'_, T> {
        let t = factor.clamp(0.0, 1.0);
        let (rect, visibility) = match (self.from, self.to) {
            (Some(from), Some(to)) => (from.lerp(&to, t), 1.0),
            (None, Some(to)) => (to, t),
            (Some(from), None) => (from, 1.0 - t),
            (None, None) => (Rect::default(), 0.0),
        };
        ChipFrame {
            payload: &self.payload,
            rect,
            visibility,
        }
    }
}

/// A chip as it should be drawn on one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipFrame<'a, T> {
    pub payload: &'a T,
    pub rect: Rect,
    /// 0.0 is invisible, 1.0 fully shown.
    pub visibility: f32,
}

/// Chip-by-chip transition between two layout passes.
///
/// Chips are matched by payload. Chips of the new pass come first in their
/// new order, followed by the chips that are being removed in their old
/// order, so removed chips draw on top while they fade out.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipTransition<T> {
    motions: Vec<ChipMotion<T>>,
}

impl<T: PartialEq + Clone> ChipTransition<T> {
    pub fn between(from: &LayoutResult<T>, to: &LayoutResult<T>) -> Self {
        let mut matched = vec![false; from.placed.len()];
        let mut motions = Vec::with_capacity(from.placed.len().max(to.placed.len()));

        for target in &to.placed {
            // Duplicate payloads pair up first-come, first-served.
            let source = from
                .placed
                .iter()
                .enumerate()
                .find(|(i, p)| !matched[*i] && p.item.payload == target.item.payload);
            let from_rect = source.map(|(i, p)| {
                matched[i] = true;
                p.rect()
            });
            motions.push(ChipMotion {
                payload: target.item.payload.clone(),
                from: from_rect,
                to: Some(target.rect()),
            });
        }

        for (placed, _) in from.placed.iter().zip(&matched).filter(|(_, m)| !**m) {
            motions.push(ChipMotion {
                payload: placed.item.payload.clone(),
                from: Some(placed.rect()),
                to: None,
            });
        }

        tracing::trace!(
            "chip transition: {} -> {} chips, {} motions",
            from.len(),
            to.len(),
            motions.len()
        );

        Self { motions }
    }
}

impl<T> ChipTransition<T> {
    pub fn motions(&self) -> &[ChipMotion<T>] {
        &self.motions
    }

    /// Frames for every chip at animation progress `factor`, in draw order.
    pub fn frames(&self, factor: f32) -> impl Iterator<Item = ChipFrame<'_, T>> {
        self.motions.iter().map(move |m| m.at(factor))
    }

    /// True when nothing moves, appears or disappears.
    pub fn is_settled(&self) -> bool {
        self.motions.iter().all(|m| m.from.is_some() && m.from == m.to)
    }

    /// Drop removed chips and pin the rest to their targets.
    pub fn finish(&mut self) {
        self.motions.retain(|m| m.to.is_some());
        for motion in &mut self.motions {
            motion.from = motion.to;
        }
    }
}
