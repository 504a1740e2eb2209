//! Series → cell writes.
//!
//! Axes first, then each series in append order; last write wins. Glyph
//! choice is a pure function of slope, so the same figure always rasterizes
//! to the same grid.

use std::f64::consts::FRAC_PI_8;

use tracing::trace;

use crate::{
    core::{
        bounds::Axis,
        constants::{
            AXIS_CROSSING_MARKER, AXIS_CROSSING_SUBSTITUTE, FALLING_GLYPH, HORIZONTAL_GLYPH,
            RISING_GLYPH, SLOPE_EPSILON, TICK_GLYPH, VERTICAL_GLYPH, X_AXIS_GLYPH, Y_AXIS_GLYPH,
        },
        series::{Glyph, Series, Style},
        viewport::Viewport,
    },
    render::{
        clip::{Point, clip},
        grid::Grid,
    },
};

/// What [`Rasterizer::draw_line`] did with a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Entirely outside the plot extent; nothing written.
    Clipped,
    /// Clipped ends share one cell; nothing written, counts as drawn.
    Collapsed,
    /// Cells written from the start cell up to, not including, the end cell.
    Drawn,
}

/// Pick one of five glyphs for a cell-space slope.
///
/// Buckets are 45° wide and centred on 0°, ±45° and 90°, split at
/// tan(π/8) and tan(3π/8). A slope exactly on a split (or NaN) gets
/// `fallback`.
#[must_use]
pub fn glyph_for_slope(slope: f64, fallback: char) -> char {
    let shallow = FRAC_PI_8.tan();
    let steep = (3.0 * FRAC_PI_8).tan();
    if slope > steep || slope < -steep {
        VERTICAL_GLYPH
    } else if shallow < slope && slope < steep {
        RISING_GLYPH
    } else if slope.abs() < shallow {
        HORIZONTAL_GLYPH
    } else if -steep < slope && slope < -shallow {
        FALLING_GLYPH
    } else {
        fallback
    }
}

pub struct Rasterizer<'a> {
    vp: &'a Viewport,
    grid: Grid,
    axes: bool,
}

impl<'a> Rasterizer<'a> {
    /// `axes` says whether axis lines are (or will be) on the grid; it turns
    /// on the glyph substitutions along the x-axis row.
    #[must_use]
    pub const fn new(vp: &'a Viewport, grid: Grid, axes: bool) -> Self {
        Self { vp, grid, axes }
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Full-length axis lines through data zero, crossing marked.
    pub fn draw_axes(&mut self) {
        let zero_x = self.vp.zero_cell(Axis::X);
        let zero_y = self.vp.zero_cell(Axis::Y);
        for y in 0..self.vp.size(Axis::Y) {
            self.grid.put(zero_x, y, Y_AXIS_GLYPH);
        }
        for x in 0..self.vp.size(Axis::X) {
            self.grid.put(x, zero_y, X_AXIS_GLYPH);
        }
        self.grid.put(zero_x, zero_y, TICK_GLYPH);
    }

    /// Slope in cell units: data slope corrected for non-square cells.
    #[inline]
    fn cell_slope(&self, from: Point, to: Point) -> f64 {
        (to.1 - from.1) / (to.0 - from.0) / self.vp.aspect_ratio()
    }

    #[inline]
    fn cell(&self, p: Point) -> (i64, i64) {
        (self.vp.to_cell(p.0, Axis::X), self.vp.to_cell(p.1, Axis::Y))
    }

    /// Clip, pick one glyph for the whole segment, then step along the
    /// dominant axis.
    #[allow(
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation
    )]
    pub fn draw_line(&mut self, p1: Point, p2: Point, glyph: Glyph) -> LineOutcome {
        let Some((start, end)) = clip(p1, p2, &self.vp.extent(1.0)) else {
            return LineOutcome::Clipped;
        };
        let (x0, y0) = self.cell(start);
        let (x1, y1) = self.cell(end);
        if (x0, y0) == (x1, y1) {
            return LineOutcome::Collapsed;
        }

        let symbol = if start.0 == end.0 {
            VERTICAL_GLYPH
        } else if start.1 == end.1 {
            HORIZONTAL_GLYPH
        } else {
            glyph_for_slope(self.cell_slope(start, end), glyph.char())
        };

        let axis_row = self.vp.zero_cell(Axis::Y);
        let (dx, dy) = (x1 - x0, y1 - y0);
        trace!(x0, y0, x1, y1, %symbol, "rasterize segment");

        if dx.abs() > dy.abs() {
            let s = dx.signum();
            let m = dy as f64 / dx as f64;
            for i in 0..dx.abs() {
                let cx = x0 + i * s;
                let cy = m.mul_add((i * s) as f64, y0 as f64) as i64;
                self.stroke(cx, cy, symbol, axis_row);
            }
        } else {
            let s = dy.signum();
            let m = dx as f64 / dy as f64;
            for i in 0..dy.abs() {
                let cy = y0 + i * s;
                let cx = m.mul_add((i * s) as f64, x0 as f64) as i64;
                self.stroke(cx, cy, symbol, axis_row);
            }
        }
        LineOutcome::Drawn
    }

    #[inline]
    fn stroke(&mut self, cx: i64, cy: i64, symbol: char, axis_row: i64) {
        let symbol = if self.axes && cy == axis_row && symbol == X_AXIS_GLYPH {
            HORIZONTAL_GLYPH
        } else {
            symbol
        };
        self.grid.put(cx, cy, symbol);
    }

    pub fn draw_series(&mut self, series: &Series) {
        match series.draw_style() {
            Style::Lines => self.draw_connected(series),
            Style::Points => self.draw_points(series),
            Style::Bars { width } => self.draw_bars(series, width),
        }
    }

    /// Segments between x-sorted points, then a marker on every point whose
    /// incoming segment did not collapse. The marker also fills the end cell
    /// that [`Rasterizer::draw_line`] leaves open.
    fn draw_connected(&mut self, series: &Series) {
        let pts = series.sorted_points();
        let glyph = series.glyph_rule();

        if let [only] = pts.as_slice() {
            self.place_marker(*only, None, glyph);
        }
        for (i, pair) in pts.windows(2).enumerate() {
            let (prev, cur) = (pair[0], pair[1]);
            let outcome = self.draw_line(prev, cur, glyph);
            if i == 0 && outcome == LineOutcome::Clipped {
                self.place_marker(prev, Some(cur), glyph);
            }
            if outcome != LineOutcome::Collapsed {
                self.place_marker(cur, Some(prev), glyph);
            }
        }
    }

    fn place_marker(&mut self, p: Point, neighbour: Option<Point>, glyph: Glyph) {
        if !self.vp.is_inside_data(p.0, p.1) {
            return;
        }
        let mut symbol = glyph.char();
        if let Some(n) = neighbour.filter(|n| (p.0 - n.0).abs() > SLOPE_EPSILON) {
            symbol = glyph_for_slope(self.cell_slope(n, p), symbol);
        }
        let (cx, cy) = self.cell(p);
        if !self.vp.is_inside_buffer(cx, cy) {
            return;
        }
        // Only this one marker is swapped; other glyphs on the axis row stay.
        if self.axes && cy == self.vp.to_cell(0.0, Axis::Y) && symbol == AXIS_CROSSING_MARKER {
            symbol = AXIS_CROSSING_SUBSTITUTE;
        }
        self.grid.put(cx, cy, symbol);
    }

    fn draw_points(&mut self, series: &Series) {
        let c = series.glyph_rule().char();
        for (x, y) in series.points() {
            if !self.vp.is_inside_data(x, y) {
                continue;
            }
            let (cx, cy) = self.cell((x, y));
            if self.vp.is_inside_buffer(cx, cy) {
                self.grid.put(cx, cy, c);
            }
        }
    }

    /// Fill every column the bar spans from the zero row to the value row.
    fn draw_bars(&mut self, series: &Series, width: f64) {
        let c = series.glyph_rule().char();
        let window = self.vp.data_window();
        let (w, h) = (self.vp.size(Axis::X), self.vp.size(Axis::Y));
        let half = width.abs() / 2.0;
        let base = self.vp.to_cell_clamped(0.0, Axis::Y, 0, h);

        for (x, y) in series.points() {
            if !(window.x_min..window.x_max).contains(&x) {
                continue;
            }
            let left = self.vp.to_cell_clamped(x - half, Axis::X, 0, w);
            let right = self.vp.to_cell_clamped(x + half, Axis::X, 0, w);
            let top = self.vp.to_cell_clamped(y, Axis::Y, 0, h);
            for cx in left..=right {
                for cy in base.min(top)..=base.max(top) {
                    self.grid.put(cx, cy, c);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::{GridShape, Margins};

    fn viewport(w: usize, h: usize, x: (f64, f64), y: (f64, f64)) -> Viewport {
        let mut vp = Viewport::new(GridShape::new(w, h).unwrap(), Margins::new(0.0, 0.0).unwrap());
        vp.set_x_limits(x.0, x.1).unwrap();
        vp.set_y_limits(y.0, y.1).unwrap();
        vp
    }

    fn raster(vp: &Viewport, axes: bool) -> Rasterizer<'_> {
        Rasterizer::new(vp, Grid::new(vp.shape()), axes)
    }

    #[test]
    fn slope_buckets_cover_every_direction() {
        assert_eq!(glyph_for_slope(0.0, '?'), HORIZONTAL_GLYPH);
        assert_eq!(glyph_for_slope(0.3, '?'), HORIZONTAL_GLYPH);
        assert_eq!(glyph_for_slope(-0.3, '?'), HORIZONTAL_GLYPH);
        assert_eq!(glyph_for_slope(1.0, '?'), RISING_GLYPH);
        assert_eq!(glyph_for_slope(-1.0, '?'), FALLING_GLYPH);
        assert_eq!(glyph_for_slope(5.0, '?'), VERTICAL_GLYPH);
        assert_eq!(glyph_for_slope(-5.0, '?'), VERTICAL_GLYPH);
        assert_eq!(glyph_for_slope(f64::INFINITY, '?'), VERTICAL_GLYPH);
    }

    #[test]
    fn exact_thresholds_fall_back() {
        let shallow = FRAC_PI_8.tan();
        let steep = (3.0 * FRAC_PI_8).tan();
        for t in [shallow, -shallow, steep, -steep] {
            assert_eq!(glyph_for_slope(t, '?'), '?');
        }
        assert_eq!(glyph_for_slope(f64::NAN, '?'), '?');
    }

    #[test]
    fn irrational_slopes_never_fall_back() {
        let known = [
            HORIZONTAL_GLYPH,
            RISING_GLYPH,
            FALLING_GLYPH,
            VERTICAL_GLYPH,
        ];
        for i in -500..500 {
            let slope = f64::from(i) * std::f64::consts::SQRT_2 / 37.0;
            assert!(known.contains(&glyph_for_slope(slope, '?')), "{slope}");
        }
    }

    #[test]
    fn axes_cross_at_zero() {
        let vp = viewport(10, 10, (-5.0, 5.0), (-5.0, 5.0));
        let mut r = raster(&vp, true);
        r.draw_axes();
        let g = r.into_grid();
        assert_eq!(g.get(5, 5), Some(TICK_GLYPH));
        assert_eq!(g.get(5, 0), Some(Y_AXIS_GLYPH));
        assert_eq!(g.get(0, 5), Some(X_AXIS_GLYPH));
        assert_eq!(g.filled(), 19);
    }

    #[test]
    fn axes_stay_off_the_border_when_zero_is_outside() {
        let vp = viewport(10, 10, (5.0, 15.0), (-20.0, -10.0));
        let mut r = raster(&vp, true);
        r.draw_axes();
        let g = r.into_grid();
        assert_eq!(g.get(1, 9), Some(TICK_GLYPH));
    }

    #[test]
    fn clipped_segment_writes_nothing() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        let outcome = r.draw_line((20.0, 20.0), (30.0, 25.0), Glyph::Auto);
        assert_eq!(outcome, LineOutcome::Clipped);
        assert_eq!(r.into_grid().filled(), 0);
    }

    #[test]
    fn tiny_segment_collapses() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        assert_eq!(
            r.draw_line((2.1, 2.1), (2.6, 2.7), Glyph::Auto),
            LineOutcome::Collapsed
        );
        assert_eq!(r.into_grid().filled(), 0);
    }

    #[test]
    fn diagonal_uses_one_glyph_and_leaves_end_open() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        assert_eq!(
            r.draw_line((1.5, 1.5), (6.5, 6.5), Glyph::Auto),
            LineOutcome::Drawn
        );
        let g = r.into_grid();
        for i in 1..6 {
            assert_eq!(g.get(i, i), Some(RISING_GLYPH));
        }
        assert_eq!(g.get(6, 6), Some(' '));
        assert_eq!(g.filled(), 5);
    }

    #[test]
    fn horizontal_axis_glyph_is_replaced_on_the_axis_row() {
        let vp = viewport(10, 10, (-5.0, 5.0), (-5.0, 5.0));
        let mut r = raster(&vp, true);
        r.stroke(3, 5, X_AXIS_GLYPH, 5);
        r.stroke(3, 4, X_AXIS_GLYPH, 5);
        r.stroke(4, 5, RISING_GLYPH, 5);
        let g = r.into_grid();
        assert_eq!(g.get(3, 5), Some(HORIZONTAL_GLYPH));
        assert_eq!(g.get(3, 4), Some(X_AXIS_GLYPH));
        assert_eq!(g.get(4, 5), Some(RISING_GLYPH));

        let mut bare = raster(&vp, false);
        bare.stroke(3, 5, X_AXIS_GLYPH, 5);
        assert_eq!(bare.into_grid().get(3, 5), Some(X_AXIS_GLYPH));
    }

    #[test]
    fn connected_series_marks_points() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        let s = Series::new(vec![1.5, 6.5], vec![1.5, 1.5])
            .unwrap()
            .glyph(Glyph::Literal('*'));
        r.draw_series(&s);
        let g = r.into_grid();
        // Horizontal run from 1 to 5, the end point completes it with the
        // slope glyph.
        for x in 1..=6 {
            assert_eq!(g.get(x, 1), Some(HORIZONTAL_GLYPH), "x={x}");
        }
    }

    #[test]
    fn axis_marker_becomes_equals() {
        let vp = viewport(10, 10, (-5.0, 5.0), (-5.0, 5.0));
        let mut r = raster(&vp, true);
        r.draw_axes();
        let s = Series::new(vec![2.5], vec![0.0])
            .unwrap()
            .glyph(Glyph::named("-").unwrap());
        r.draw_series(&s);
        let g = r.into_grid();
        assert_eq!(g.get(7, 5), Some(AXIS_CROSSING_SUBSTITUTE));
    }

    #[test]
    fn other_markers_on_the_axis_row_are_kept() {
        let vp = viewport(10, 10, (-5.0, 5.0), (-5.0, 5.0));
        let mut r = raster(&vp, true);
        r.draw_axes();
        let s = Series::new(vec![2.5], vec![0.0])
            .unwrap()
            .glyph(Glyph::Literal('o'));
        r.draw_series(&s);
        assert_eq!(r.into_grid().get(7, 5), Some('o'));
    }

    #[test]
    fn scatter_skips_points_outside_the_data() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        let s = Series::new(vec![1.0, 5.0, 50.0], vec![1.0, 9.5, 1.0])
            .unwrap()
            .glyph(Glyph::Literal('x'))
            .style(Style::Points);
        r.draw_series(&s);
        let g = r.into_grid();
        assert_eq!(g.get(1, 1), Some('x'));
        assert_eq!(g.get(5, 9), Some('x'));
        assert_eq!(g.filled(), 2);
    }

    #[test]
    fn bars_fill_from_the_baseline() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        let s = Series::new(vec![2.5], vec![4.5])
            .unwrap()
            .glyph(Glyph::Literal('#'))
            .style(Style::Bars { width: 0.0 });
        r.draw_series(&s);
        let g = r.into_grid();
        for y in 0..=4 {
            assert_eq!(g.get(2, y), Some('#'));
        }
        assert_eq!(g.filled(), 5);
    }

    #[test]
    fn bars_at_the_upper_x_limit_are_skipped() {
        let vp = viewport(10, 10, (0.0, 10.0), (0.0, 10.0));
        let mut r = raster(&vp, false);
        let s = Series::new(vec![0.0, 10.0], vec![4.5, 4.5])
            .unwrap()
            .glyph(Glyph::Literal('#'))
            .style(Style::Bars { width: 0.0 });
        r.draw_series(&s);
        let g = r.into_grid();
        assert_eq!(g.get(0, 4), Some('#'));
        assert_eq!(g.filled(), 5);
    }
}
