//! Extent tick labels and the legend, laid over an already rasterized grid.
//!
//! Text never wraps: characters that would land outside the buffer are
//! dropped one by one, and labels that cannot be formatted are left out.

use crate::{
    core::{
        bounds::Axis,
        constants::{LEGEND_RIGHT_PAD, TICK_GLYPH},
        series::Series,
        viewport::Viewport,
    },
    render::grid::Grid,
};

pub struct Annotator<'a> {
    vp: &'a Viewport,
    grid: Grid,
}

impl<'a> Annotator<'a> {
    #[must_use]
    pub const fn new(vp: &'a Viewport, grid: Grid) -> Self {
        Self { vp, grid }
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Tick marks at the four extent boundaries plus their values.
    ///
    /// X values sit on the row below the x-axis, the min value growing right
    /// of its tick and the max value ending left of its tick. Y values start
    /// one column right of the y-axis on their own rows.
    pub fn draw_extent_labels(&mut self) {
        let (w, h) = (self.vp.size(Axis::X), self.vp.size(Axis::Y));
        if h < 2 {
            return;
        }
        let e = self.vp.extent(1.0);
        let min_x = self.vp.to_cell_clamped(e.x_min, Axis::X, 0, w);
        let max_x = self.vp.to_cell_clamped(e.x_max, Axis::X, 0, w);
        let min_y = self.vp.to_cell_clamped(e.y_min, Axis::Y, 1, h);
        let max_y = self.vp.to_cell_clamped(e.y_max, Axis::Y, 1, h);
        let zero_x = self.vp.to_cell_clamped(0.0, Axis::X, 0, w);
        let zero_y = self.vp.to_cell_clamped(0.0, Axis::Y, 1, h);

        for (x, y) in [(zero_x, min_y), (zero_x, max_y), (min_x, zero_y), (max_x, zero_y)] {
            self.grid.put(x, y, TICK_GLYPH);
        }

        let labels = self.vp.extent_labels();
        if let Some((lo, hi)) = labels.x {
            self.grid.put_str(min_x + 1, zero_y - 1, &lo);
            self.grid.put_str(max_x - char_len(&hi), zero_y - 1, &hi);
        }
        if let Some((lo, hi)) = labels.y {
            self.grid.put_str(zero_x + 1, max_y, &hi);
            self.grid.put_str(zero_x + 1, min_y, &lo);
        }
    }

    /// `glyph label` rows in the top-right corner, one per labelled series.
    ///
    /// Starts one row below the top and stops before the bottom row; entries
    /// that do not fit are skipped.
    pub fn draw_legend(&mut self, series: &[Series]) {
        let entries: Vec<(char, &str)> = series
            .iter()
            .filter_map(|s| s.legend_label().map(|l| (s.glyph_rule().char(), l)))
            .collect();
        let Some(longest) = entries.iter().map(|(_, l)| char_len(l)).max() else {
            return;
        };

        let (w, h) = (self.vp.size(Axis::X), self.vp.size(Axis::Y));
        let pad = i64::try_from(LEGEND_RIGHT_PAD).unwrap_or(0);
        let x = w - longest - pad;

        for (row, (glyph, label)) in (1..h - 1).zip(entries) {
            // Rows count down from the top; the grid stores y upward.
            let y = h - 1 - row;
            self.grid.put(x, y, glyph);
            self.grid.put_str(x + 2, y, label);
        }
    }
}

#[inline]
fn char_len(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}
