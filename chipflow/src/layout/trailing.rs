//! Fitting a trailing badge (the message timestamp) after the last row.

use crate::error::{LayoutError, check_parameter};

use super::result::LayoutResult;

/// Where a trailing badge ends up relative to the reaction block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailingFit {
    /// The badge needs a line of its own below the block.
    pub expands: bool,
    /// Block width once the badge is accounted for.
    pub width: f32,
    /// Left edge of the badge when it shares the last row.
    pub x: Option<f32>,
}

impl<T> LayoutResult<T> {
    /// Decide whether a badge `trailing_width` wide fits beside the last row.
    ///
    /// `force_expand` always moves the badge onto its own line.
    pub fn fit_trailing(
        &self,
        trailing_width: f32,
        force_expand: bool,
    ) -> Result<TrailingFit, LayoutError> {
        let trailing_width = check_parameter("trailing_width", trailing_width)?;

        let inline_width = self.last_row_width + trailing_width;
        let fit = if force_expand || inline_width > self.max_width {
            TrailingFit {
                expands: true,
                width: self.bounds.width,
                x: None,
            }
        } else {
            TrailingFit {
                expands: false,
                width: self.bounds.width.max(inline_width),
                x: Some(self.last_row_width),
            }
        };
        Ok(fit)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LayoutError;
    use crate::layout::{FlowLayout, LayoutResult, ReactionItem};

    fn block(widths: &[f32], max_width: f32) -> LayoutResult<()> {
        let items = widths.iter().map(|w| ReactionItem::new(*w, 28.0, ()));
        FlowLayout::new()
            .row_margin(6.0)
            .column_margin(6.0)
            .layout(items, max_width)
            .unwrap()
    }

    #[test]
    fn badge_fits_on_short_last_row() {
        let result = block(&[60.0, 60.0, 40.0], 130.0);
        assert_eq!(result.last_row_width, 40.0);

        let fit = result.fit_trailing(50.0, false).unwrap();
        assert!(!fit.expands);
        assert_eq!(fit.x, Some(40.0));
        assert_eq!(fit.width, 126.0);
    }

    #[test]
    fn badge_widens_single_row_block() {
        let result = block(&[40.0], 200.0);
        let fit = result.fit_trailing(50.0, false).unwrap();
        assert!(!fit.expands);
        assert_eq!(fit.width, 90.0);
    }

    #[test]
    fn badge_expands_when_last_row_full() {
        let result = block(&[60.0, 60.0], 130.0);
        let fit = result.fit_trailing(20.0, false).unwrap();
        assert!(fit.expands);
        assert_eq!(fit.width, 126.0);
        assert_eq!(fit.x, None);
    }

    #[test]
    fn force_expand_wins() {
        let result = block(&[10.0], 500.0);
        assert!(result.fit_trailing(10.0, true).unwrap().expands);
    }

    #[test]
    fn malformed_badge_width_is_rejected() {
        let result = block(&[40.0], 100.0);
        for width in [-500.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                result.fit_trailing(width, false),
                Err(LayoutError::InvalidParameter {
                    name: "trailing_width",
                    ..
                })
            ));
        }
        assert!(result.metrics(-1.0, false).is_err());
    }
}
