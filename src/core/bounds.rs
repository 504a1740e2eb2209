//! Geometry helpers: axis ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    series::Series,
};

/// Which axis we’re measuring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Lowercase axis letter, used in error messages.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }

    /// Union of every series' range along this axis, without padding.
    ///
    /// `None` for an empty slice. Degenerate ranges are returned as-is; the
    /// viewport applies the widen-by-one rule when they are stored.
    #[must_use]
    pub fn bounds(self, series: &[Series]) -> Option<(f64, f64)> {
        series
            .iter()
            .map(|s| s.fit_range(self))
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions to a plot grid.
/// Leaves one spare column and a couple of rows for the shell prompt.
#[inline]
#[must_use]
pub fn fit_shape((w, h): (Width, Height)) -> (usize, usize) {
    let width = usize::from(w.0).saturating_sub(1).max(1);
    let height = usize::from(h.0).saturating_sub(2).max(1);
    (width, height)
}

/// Grid shape for the CLI: the terminal when `fit` is set, otherwise 50×20.
#[inline]
#[must_use]
pub fn default_shape(fit: bool) -> (usize, usize) {
    if fit {
        fit_shape(terminal_geometry())
    } else {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
