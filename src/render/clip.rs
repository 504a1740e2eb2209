//! Segment clipping against the plot extent.
//!
//! Axis-aligned segments are clamped directly. Everything else goes through a
//! six-parameter sort: the segment's own `0` and `1` plus the parameters where
//! the supporting line meets each of the four extent edges. After sorting,
//! the middle pair (positions 2 and 3) bracket the part inside the rectangle
//! whichever edges were hit, so no per-edge branching is needed.

use crate::core::viewport::Extent;

/// Data-space point.
pub type Point = (f64, f64);

/// Sub-segment of `p1 → p2` inside `e`, or `None` when they are disjoint.
///
/// Both bracketing parameters must lie in `[0, 1)`, so a sloped segment that
/// enters the extent and ends inside it (exit parameter exactly `1`) is also
/// `None`.
#[must_use]
pub fn clip(p1: Point, p2: Point, e: &Extent) -> Option<(Point, Point)> {
    let (x_lo, x_hi) = (p1.0.min(p2.0), p1.0.max(p2.0));
    let (y_lo, y_hi) = (p1.1.min(p2.1), p1.1.max(p2.1));

    // Vertical
    if p1.0 == p2.0 {
        let (lo, hi) = (y_lo.max(e.y_min), y_hi.min(e.y_max));
        if p1.0 < e.x_min || p1.0 > e.x_max || lo > hi {
            return None;
        }
        return Some(((p1.0, lo), (p1.0, hi)));
    }
    // Horizontal
    if p1.1 == p2.1 {
        let (lo, hi) = (x_lo.max(e.x_min), x_hi.min(e.x_max));
        if p1.1 < e.y_min || p1.1 > e.y_max || lo > hi {
            return None;
        }
        return Some(((lo, p1.1), (hi, p1.1)));
    }

    if e.contains(p1.0, p1.1) && e.contains(p2.0, p2.1) {
        return Some((p1, p2));
    }

    let (dx, dy) = (p2.0 - p1.0, p2.1 - p1.1);
    let mut ts = [
        0.0,
        1.0,
        (e.x_min - p1.0) / dx,
        (e.x_max - p1.0) / dx,
        (e.y_min - p1.1) / dy,
        (e.y_max - p1.1) / dy,
    ];
    ts.sort_by(f64::total_cmp);

    let (t_in, t_out) = (ts[2], ts[3]);
    let unit = 0.0..1.0;
    if !unit.contains(&t_in) || !unit.contains(&t_out) {
        return None;
    }
    let at = |t: f64| (dx.mul_add(t, p1.0), dy.mul_add(t, p1.1));
    // When the line misses the box the middle pair is an exit followed by an
    // entry; their midpoint then falls outside.
    let mid = at((t_in + t_out) * 0.5);
    let slack = 1e-9 * (e.x_max - e.x_min).abs().max(e.y_max - e.y_min).max(1.0);
    if mid.0 < e.x_min - slack
        || mid.0 > e.x_max + slack
        || mid.1 < e.y_min - slack
        || mid.1 > e.y_max + slack
    {
        return None;
    }
    Some((at(t_in), at(t_out)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Extent = Extent {
        x_min: 0.0,
        x_max: 10.0,
        y_min: 0.0,
        y_max: 10.0,
    };

    #[test]
    fn inside_segments_are_returned_unchanged() {
        let seg = ((1.0, 2.0), (7.5, 9.0));
        assert_eq!(clip(seg.0, seg.1, &UNIT), Some(seg));
        let back = ((7.5, 9.0), (1.0, 2.0));
        assert_eq!(clip(back.0, back.1, &UNIT), Some(back));
    }

    #[test]
    fn disjoint_segments_vanish() {
        assert_eq!(clip((-5.0, -4.0), (-1.0, -2.0), &UNIT), None);
        // Line would cross the box, but only beyond the segment's end.
        assert_eq!(clip((-9.0, -9.0), (-8.0, -7.5), &UNIT), None);
        // Line passes the corner without touching the box.
        assert_eq!(clip((11.0, 0.0), (20.0, 9.0), &UNIT), None);
        assert_eq!(clip((-3.0, 9.0), (3.0, 15.0), &UNIT), None);
    }

    #[test]
    fn crossing_segments_are_cut_at_both_edges() {
        // y = 0.5x + 0.5: enters through x = 0, leaves through x = 10.
        let (a, b) = clip((-5.0, -2.0), (15.0, 8.0), &UNIT).unwrap();
        assert!((a.0 - 0.0).abs() < 1e-12 && (a.1 - 0.5).abs() < 1e-12);
        assert!((b.0 - 10.0).abs() < 1e-12 && (b.1 - 5.5).abs() < 1e-12);
    }

    #[test]
    fn segment_leaving_the_box_keeps_its_start() {
        let (a, b) = clip((5.0, 5.0), (15.0, 7.5), &UNIT).unwrap();
        assert_eq!(a, (5.0, 5.0));
        assert!((b.0 - 10.0).abs() < 1e-12 && (b.1 - 6.25).abs() < 1e-12);
    }

    #[test]
    fn segment_ending_inside_after_entering_is_dropped() {
        // Enters through x = 0 at t = 0.5, then stops inside at t = 1.
        assert_eq!(clip((-5.0, 5.0), (5.0, 5.5), &UNIT), None);
        assert_eq!(
            clip((5.0, 5.5), (-5.0, 5.0), &UNIT).map(|(a, _)| a),
            Some((5.0, 5.5))
        );
    }

    #[test]
    fn axis_aligned_segments_are_clamped() {
        assert_eq!(
            clip((3.0, -5.0), (3.0, 20.0), &UNIT),
            Some(((3.0, 0.0), (3.0, 10.0)))
        );
        assert_eq!(
            clip((12.0, 4.0), (-2.0, 4.0), &UNIT),
            Some(((0.0, 4.0), (10.0, 4.0)))
        );
        assert_eq!(clip((3.0, 11.0), (3.0, 20.0), &UNIT), None);
        assert_eq!(clip((-1.0, 0.0), (-1.0, 5.0), &UNIT), None);
        assert_eq!(clip((0.0, 12.0), (5.0, 12.0), &UNIT), None);
    }

    #[test]
    fn clipped_part_always_lies_within_the_extent() {
        for i in 0..40 {
            let f = f64::from(i);
            let p1 = (f.mul_add(0.7, -8.0), f.mul_add(-0.45, 13.0));
            let p2 = (f.mul_add(-0.3, 17.0), f.mul_add(0.55, -6.0));
            if let Some((a, b)) = clip(p1, p2, &UNIT) {
                for p in [a, b] {
                    assert!(p.0 >= -1e-9 && p.0 <= 10.0 + 1e-9, "{p:?}");
                    assert!(p.1 >= -1e-9 && p.1 <= 10.0 + 1e-9, "{p:?}");
                }
            }
        }
    }
}
