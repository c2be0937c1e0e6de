//! Wheel geometry
//!
//! Projects the option ring onto the terminal grid. Item i sits at
//! `rotation + i * step` degrees around the ring; the sine of that
//! angle gives its horizontal offset from the wheel center and the
//! cosine its depth, with 1.0 facing the viewer and -1.0 turned away.

/// Depth below which an item is culled entirely
pub const VISIBILITY_CUTOFF: f64 = 0.1;

/// One option's place on screen for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedItem {
    pub index: usize,
    /// Signed horizontal offset from the wheel center, in cells
    pub x_offset: f64,
    /// 1.0 at the front of the ring, -1.0 at the back
    pub depth: f64,
}

/// Size and brightness class derived from depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthTier {
    /// The focused item, drawn as a full card
    Front,
    /// Direct neighbors, drawn in their own color
    Mid,
    /// Rim items, drawn dimmed
    Back,
}

/// Classify a depth value, or None when the item should be culled
pub fn tier_for_depth(depth: f64) -> Option<DepthTier> {
    if depth < VISIBILITY_CUTOFF {
        None
    } else if depth > 0.95 {
        Some(DepthTier::Front)
    } else if depth > 0.7 {
        Some(DepthTier::Mid)
    } else {
        Some(DepthTier::Back)
    }
}

/// Project every ring position for the given rotation
///
/// Returns all items sorted back to front so the caller can paint them
/// in order and let nearer items overdraw farther ones.
pub fn project(rotation_degrees: f64, count: usize, radius: f64) -> Vec<ProjectedItem> {
    let step = 360.0 / count as f64;

    let mut items: Vec<ProjectedItem> = (0..count)
        .map(|index| {
            let angle = (rotation_degrees + index as f64 * step).to_radians();
            ProjectedItem {
                index,
                x_offset: angle.sin() * radius,
                depth: angle.cos(),
            }
        })
        .collect();

    items.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn frontmost(items: &[ProjectedItem]) -> &ProjectedItem {
        items.last().unwrap()
    }

    #[test]
    fn test_focused_item_is_frontmost() {
        // After k right rotations the accumulated angle is -30k and
        // item k faces the viewer.
        for k in 0..12 {
            let items = project(-30.0 * k as f64, 12, 20.0);
            let front = frontmost(&items);
            assert_eq!(front.index, k);
            assert!((front.depth - 1.0).abs() < EPS);
            assert!(front.x_offset.abs() < EPS);
        }
    }

    #[test]
    fn test_neighbors_sit_symmetrically() {
        let items = project(0.0, 12, 20.0);
        let right = items.iter().find(|i| i.index == 1).unwrap();
        let left = items.iter().find(|i| i.index == 11).unwrap();

        assert!((right.x_offset - 10.0).abs() < EPS);
        assert!((left.x_offset + 10.0).abs() < EPS);
        assert!((right.depth - left.depth).abs() < EPS);
    }

    #[test]
    fn test_painter_order_is_back_to_front() {
        let items = project(-37.5, 12, 20.0);
        for pair in items.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    #[test]
    fn test_depth_tiers() {
        assert_eq!(tier_for_depth(1.0), Some(DepthTier::Front));
        assert_eq!(tier_for_depth(0.96), Some(DepthTier::Front));
        assert_eq!(tier_for_depth(0.866), Some(DepthTier::Mid));
        assert_eq!(tier_for_depth(0.5), Some(DepthTier::Back));
        assert_eq!(tier_for_depth(0.0), None);
        assert_eq!(tier_for_depth(-1.0), None);
    }

    #[test]
    fn test_visible_set_at_rest() {
        // At rest the focused item, both neighbors and both rim items
        // survive the cutoff; the rest of the ring is culled.
        let items = project(0.0, 12, 20.0);
        let visible: Vec<usize> = items
            .iter()
            .filter(|i| tier_for_depth(i.depth).is_some())
            .map(|i| i.index)
            .collect();

        assert_eq!(visible.len(), 5);
        for index in [0, 1, 2, 10, 11] {
            assert!(visible.contains(&index));
        }
    }
}
