//! Map Layout
//!
//! Geometry and tiers for the radial superskill map. Positions are percent
//! offsets inside a square container.

use std::f64::consts::PI;

/// Circle radius as percent of the container
pub const RADIUS_PERCENT: f64 = 38.0;

/// Text length thresholds between size tiers
const SIZE_THRESHOLDS: [usize; 4] = [100, 500, 1000, 2000];

/// Node diameter in px per size tier
const NODE_SIZES_PX: [u32; 5] = [64, 72, 80, 88, 96];

/// Center of a node in percent of the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub left: f64,
    pub top: f64,
}

/// Position of node `index` out of `count`, first node at 3 o'clock
pub fn node_position(index: usize, count: usize) -> NodePosition {
    if count == 0 {
        return NodePosition { left: 50.0, top: 50.0 };
    }
    let angle = (index as f64 / count as f64) * 2.0 * PI;
    NodePosition {
        left: 50.0 + RADIUS_PERCENT * angle.cos(),
        top: 50.0 + RADIUS_PERCENT * angle.sin(),
    }
}

/// Every unordered pair of nodes, `(i, j)` with `i < j`
pub fn connection_lines(count: usize) -> Vec<(usize, usize)> {
    let mut lines = Vec::with_capacity(count * count.saturating_sub(1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            lines.push((i, j));
        }
    }
    lines
}

/// Colour tier 0..=4, one per 20% of progress
pub fn color_tier(percent: u8) -> u8 {
    (percent.min(100) / 20).min(4)
}

/// Size tier 0..=4 by total text length
pub fn size_tier(text_length: usize) -> u8 {
    SIZE_THRESHOLDS
        .iter()
        .take_while(|threshold| text_length >= **threshold)
        .count() as u8
}

pub fn node_size_px(tier: u8) -> u32 {
    NODE_SIZES_PX[(tier as usize).min(NODE_SIZES_PX.len() - 1)]
}

/// Line stroke `(colour, width)` depending on wallpaper and theme
pub fn line_stroke(has_wallpaper: bool, dark: bool) -> (&'static str, &'static str) {
    match (has_wallpaper, dark) {
        (true, true) => ("rgba(255,255,255,0.35)", "1.8"),
        (true, false) => ("rgba(255,255,255,0.60)", "2.2"),
        (false, true) => ("rgba(255,255,255,0.15)", "1.2"),
        (false, false) => ("rgba(0,0,0,0.15)", "1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_node_positions_on_circle() {
        let first = node_position(0, 10);
        assert!(close(first.left, 88.0));
        assert!(close(first.top, 50.0));

        // a quarter turn lands straight below the center
        let quarter = node_position(5, 20);
        assert!(close(quarter.left, 50.0));
        assert!(close(quarter.top, 88.0));

        for i in 0..10 {
            let p = node_position(i, 10);
            let r = ((p.left - 50.0).powi(2) + (p.top - 50.0).powi(2)).sqrt();
            assert!(close(r, RADIUS_PERCENT));
        }
    }

    #[test]
    fn test_connection_lines() {
        let lines = connection_lines(10);
        assert_eq!(lines.len(), 45);
        assert!(lines.iter().all(|(i, j)| i < j));
        assert!(connection_lines(1).is_empty());
        assert!(connection_lines(0).is_empty());
    }

    #[test]
    fn test_color_tiers() {
        assert_eq!(color_tier(0), 0);
        assert_eq!(color_tier(19), 0);
        assert_eq!(color_tier(20), 1);
        assert_eq!(color_tier(25), 1);
        assert_eq!(color_tier(79), 3);
        assert_eq!(color_tier(80), 4);
        assert_eq!(color_tier(100), 4);
    }

    #[test]
    fn test_size_tiers() {
        assert_eq!(size_tier(0), 0);
        assert_eq!(size_tier(99), 0);
        assert_eq!(size_tier(100), 1);
        assert_eq!(size_tier(999), 2);
        assert_eq!(size_tier(1000), 3);
        assert_eq!(size_tier(5000), 4);
        assert_eq!(node_size_px(0), 64);
        assert_eq!(node_size_px(4), 96);
    }
}
