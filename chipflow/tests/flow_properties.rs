//! Layout properties checked over generated reaction blocks.
//!
//! Each test builds blocks from a seeded RNG so failures reproduce, then
//! checks a structural property of the wrapped result.

use chipflow::{
    FlowLayout, LayoutResult, Point, ReactionItem, Size, compute_bounds, hit_test, place_items,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROW_MARGIN: f32 = 6.0;
const COLUMN_MARGIN: f32 = 4.0;

/// Generate chips with integer sizes so sums stay exact in f32.
fn random_chips(rng: &mut StdRng, count: usize) -> Vec<ReactionItem<usize>> {
    (0..count)
        .map(|i| {
            let width = rng.gen_range(0..120) as f32;
            let height = rng.gen_range(1..40) as f32;
            ReactionItem::new(width, height, i)
        })
        .collect()
}

/// Run `check` over a spread of block sizes and max widths.
fn for_each_block(mut check: impl FnMut(&[ReactionItem<usize>], f32, LayoutResult<usize>)) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let layout = FlowLayout::new().row_margin(ROW_MARGIN).column_margin(COLUMN_MARGIN);
    for _ in 0..200 {
        let count = rng.gen_range(0..24);
        let items = random_chips(&mut rng, count);
        let max_width = rng.gen_range(0..400) as f32;
        let result = layout.layout(items.clone(), max_width).unwrap();
        check(&items, max_width, result);
    }
}

#[test]
fn placement_is_idempotent() {
    for_each_block(|items, max_width, _| {
        let first = place_items(items, max_width, ROW_MARGIN, COLUMN_MARGIN).unwrap();
        let second = place_items(items, max_width, ROW_MARGIN, COLUMN_MARGIN).unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn every_item_is_placed_in_order() {
    for_each_block(|items, _, result| {
        assert_eq!(result.len(), items.len());
        for (i, placed) in result.iter().enumerate() {
            assert_eq!(placed.item.payload, i);
        }
    });
}

#[test]
fn rows_never_overflow_unless_single_oversized_chip() {
    for_each_block(|_, max_width, result| {
        for row in 0..result.row_count {
            let chips: Vec<_> = result.row(row).collect();
            assert!(!chips.is_empty(), "row {} is empty", row);

            let extent = chips.last().map(|p| p.x + p.item.width).unwrap_or(0.0);
            if chips.len() == 1 {
                continue;
            }
            assert!(
                extent <= max_width,
                "row {} is {} wide with max {}",
                row,
                extent,
                max_width
            );
        }
    });
}

#[test]
fn row_indices_are_monotonic() {
    for_each_block(|_, _, result| {
        for pair in result.placed.windows(2) {
            assert!(pair[1].row >= pair[0].row);
            assert!(pair[1].row <= pair[0].row + 1);
        }
    });
}

#[test]
fn bounds_match_placements() {
    for_each_block(|items, max_width, result| {
        let bounds = compute_bounds(items, max_width, ROW_MARGIN, COLUMN_MARGIN).unwrap();
        assert_eq!(bounds, result.bounds);

        let right = result.iter().map(|p| p.x + p.item.width).fold(0.0f32, f32::max);
        assert_eq!(bounds.width, right);

        let max_height = items.iter().map(|i| i.height).fold(0.0f32, f32::max);
        let expected_height = result.row_count as f32 * (max_height + COLUMN_MARGIN);
        assert_eq!(bounds.height, expected_height);

        for placed in &result {
            assert!(placed.x >= 0.0 && placed.y >= 0.0);
            assert!(placed.y + placed.item.height <= bounds.height);
        }
    });
}

#[test]
fn every_chip_is_hit_at_its_origin() {
    for_each_block(|_, _, result| {
        for (i, placed) in result.iter().enumerate() {
            if placed.item.width == 0.0 {
                continue;
            }
            let hit = result.hit_index(placed.position());
            assert_eq!(hit, Some(i));
        }
    });
}

#[test]
fn empty_block() {
    let items: Vec<ReactionItem<()>> = Vec::new();
    assert!(place_items(&items, 120.0, 5.0, 4.0).unwrap().is_empty());
    assert_eq!(compute_bounds(&items, 120.0, 5.0, 4.0).unwrap(), Size::ZERO);
    assert_eq!(compute_bounds(&items, 0.0, 0.0, 0.0).unwrap(), Size::ZERO);
}

#[test]
fn three_chip_scenario() {
    let items = vec![
        ReactionItem::new(30.0, 20.0, 0),
        ReactionItem::new(30.0, 20.0, 1),
        ReactionItem::new(30.0, 20.0, 2),
    ];

    let placed = place_items(&items, 65.0, 5.0, 4.0).unwrap();
    let positions: Vec<_> = placed.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(positions, vec![(0.0, 0.0), (35.0, 0.0), (0.0, 24.0)]);
    assert_eq!(compute_bounds(&items, 65.0, 5.0, 4.0).unwrap().height, 48.0);

    let second = hit_test(&placed, Point::new(40.0, 10.0));
    let third = hit_test(&placed, Point::new(5.0, 30.0));
    assert_eq!(second.map(|i| i.payload), Some(1));
    assert_eq!(third.map(|i| i.payload), Some(2));
    assert!(hit_test(&placed, Point::new(1000.0, 1000.0)).is_none());
}
