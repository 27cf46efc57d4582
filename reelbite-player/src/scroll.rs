//! Scroll offset → active item index mapping.
//!
//! The feed is a vertical stack of items, each exactly one viewport tall.
//! The active item is the one nearest the viewport: `round(offset / extent)`
//! with the half-way tie resolving to the higher index, clamped to range so
//! out-of-bounds deltas can never activate (and therefore never play) an
//! item outside the feed.

/// Map a scroll offset to the active item index. `None` when the feed is
/// empty.
pub fn active_index_for_offset(
    offset: f32,
    item_extent: f32,
    item_count: usize,
) -> Option<usize> {
    if item_count == 0 || item_extent <= 0.0 {
        return None;
    }

    let offset = offset.max(0.0);
    // f32::round rounds half away from zero; offsets are non-negative here,
    // so the .5 boundary lands on the higher index.
    let index = (offset / item_extent).round() as usize;
    Some(index.min(item_count - 1))
}

/// Offset that centers `index` in the viewport; used by arrow-driven jumps.
pub fn target_offset_for_index(index: usize, item_extent: f32) -> f32 {
    index as f32 * item_extent
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: f32 = 800.0;

    #[test]
    fn exact_multiples_map_to_their_index() {
        for k in 0..5 {
            assert_eq!(
                active_index_for_offset(k as f32 * EXTENT, EXTENT, 5),
                Some(k)
            );
        }
    }

    #[test]
    fn rounding_tie_breaks_to_higher_index() {
        let boundary = 1.5 * EXTENT;
        assert_eq!(active_index_for_offset(boundary - 1.0, EXTENT, 5), Some(1));
        assert_eq!(active_index_for_offset(boundary, EXTENT, 5), Some(2));
        assert_eq!(active_index_for_offset(boundary + 1.0, EXTENT, 5), Some(2));
    }

    #[test]
    fn offsets_clamp_to_valid_range() {
        assert_eq!(active_index_for_offset(-50.0, EXTENT, 3), Some(0));
        assert_eq!(active_index_for_offset(100.0 * EXTENT, EXTENT, 3), Some(2));
    }

    #[test]
    fn empty_feed_has_no_active_index() {
        assert_eq!(active_index_for_offset(0.0, EXTENT, 0), None);
    }

    #[test]
    fn jump_offset_round_trips_through_mapping() {
        for k in 0..4 {
            let offset = target_offset_for_index(k, EXTENT);
            assert_eq!(active_index_for_offset(offset, EXTENT, 4), Some(k));
        }
    }
}
