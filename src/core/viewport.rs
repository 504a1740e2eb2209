//! Data space ↔ character grid mapping.
//!
//! Limits are stored *expanded*: the caller's range plus `span * margin` on
//! each side. Everything else (cell steps, the plot extent, the caller-visible
//! range) is derived from that single stored pair per axis, so there is no
//! second copy to drift out of sync.

use crate::core::{
    bounds::Axis,
    constants::{
        DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X_MARGIN, DEFAULT_Y_MARGIN, X_LABEL_FULL_WIDTH,
        X_LABEL_MIN_WIDTH, Y_LABEL_FULL_WIDTH, Y_LABEL_MIN_WIDTH,
    },
    error::ConfigError,
    format::format_g,
};

/// Grid size in character cells. Both sides are at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    width: usize,
    height: usize,
}

impl GridShape {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidShape { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Padding fractions, each in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    x: f64,
    y: f64,
}

impl Margins {
    pub fn new(x: f64, y: f64) -> Result<Self, ConfigError> {
        for (axis, value) in [('x', x), ('y', y)] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidMargin { axis, value });
            }
        }
        Ok(Self { x, y })
    }

    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_MARGIN,
            y: DEFAULT_Y_MARGIN,
        }
    }
}

/// Axis-aligned rectangle in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Half-open containment: min inclusive, max exclusive.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..self.x_max).contains(&x) && (self.y_min..self.y_max).contains(&y)
    }
}

/// Formatted extent boundaries. `None` when the grid is too narrow for that
/// axis' labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtentLabels {
    pub x: Option<(String, String)>,
    pub y: Option<(String, String)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    shape: GridShape,
    margins: Margins,
    x: (f64, f64),
    y: (f64, f64),
}

impl Viewport {
    /// Starts with `[0, 1]` on both axes.
    #[must_use]
    pub fn new(shape: GridShape, margins: Margins) -> Self {
        let mut vp = Self {
            shape,
            margins,
            x: (0.0, 1.0),
            y: (0.0, 1.0),
        };
        vp.store(Axis::X, 0.0, 1.0);
        vp.store(Axis::Y, 0.0, 1.0);
        vp
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    #[must_use]
    pub const fn margins(&self) -> Margins {
        self.margins
    }

    // --- Limits ---

    pub fn set_x_limits(&mut self, low: f64, high: f64) -> Result<(), ConfigError> {
        self.set_limits(Axis::X, low, high)
    }

    pub fn set_y_limits(&mut self, low: f64, high: f64) -> Result<(), ConfigError> {
        self.set_limits(Axis::Y, low, high)
    }

    /// Validate, widen a zero span by one unit, then store expanded.
    pub fn set_limits(&mut self, axis: Axis, low: f64, high: f64) -> Result<(), ConfigError> {
        let letter = axis.letter();
        if !low.is_finite() || !high.is_finite() {
            return Err(ConfigError::NonFiniteRange {
                axis: letter,
                low,
                high,
            });
        }
        if low > high {
            return Err(ConfigError::InvalidRange {
                axis: letter,
                low,
                high,
            });
        }
        if !self.store(axis, low, high) {
            return Err(ConfigError::DegenerateRange { axis: letter, value: low });
        }
        Ok(())
    }

    /// Returns false, leaving the limits untouched, when even the widened span
    /// is lost to rounding.
    fn store(&mut self, axis: Axis, low: f64, mut high: f64) -> bool {
        if high - low <= 0.0 {
            high += 1.0;
        }
        let pad = (high - low) * self.margins.along(axis);
        let limits = (low - pad, high + pad);
        if !(limits.1 - limits.0 > 0.0 && limits.0.is_finite() && limits.1.is_finite()) {
            return false;
        }
        match axis {
            Axis::X => self.x = limits,
            Axis::Y => self.y = limits,
        }
        true
    }

    /// Stored (expanded) x limits.
    #[inline]
    #[must_use]
    pub const fn x_limits(&self) -> (f64, f64) {
        self.x
    }

    /// Stored (expanded) y limits.
    #[inline]
    #[must_use]
    pub const fn y_limits(&self) -> (f64, f64) {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn limits(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Shift the view by a fraction of the current span on each axis.
    pub fn pan(&mut self, x_fraction: f64, y_fraction: f64) {
        for (axis, fraction) in [(Axis::X, x_fraction), (Axis::Y, y_fraction)] {
            if !fraction.is_finite() {
                continue;
            }
            let (lo, hi) = self.limits(axis);
            let shift = (hi - lo) * fraction;
            self.replace(axis, (lo + shift, hi + shift));
        }
    }

    /// Scale both spans around their centres; `factor > 1` zooms out.
    pub fn zoom(&mut self, factor: f64) -> Result<(), ConfigError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::InvalidZoom(factor));
        }
        for axis in [Axis::X, Axis::Y] {
            let (lo, hi) = self.limits(axis);
            let mid = (lo + hi) * 0.5;
            let half = (hi - lo) * 0.5 * factor;
            if half > 0.0 {
                self.replace(axis, (mid - half, mid + half));
            }
        }
        Ok(())
    }

    fn replace(&mut self, axis: Axis, limits: (f64, f64)) {
        if limits.1 - limits.0 > 0.0 {
            match axis {
                Axis::X => self.x = limits,
                Axis::Y => self.y = limits,
            }
        }
    }

    // --- Cell mapping ---

    /// Data units per cell; always > 0.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self, axis: Axis) -> f64 {
        let (lo, hi) = self.limits(axis);
        (hi - lo) / self.shape.along(axis) as f64
    }

    /// `y_step / x_step`: how much taller a cell is than wide, in data units.
    #[inline]
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.step(Axis::Y) / self.step(Axis::X)
    }

    /// Cell index of `value`, unbounded.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_cell(&self, value: f64, axis: Axis) -> i64 {
        let (lo, _) = self.limits(axis);
        ((value - lo) / self.step(axis)).floor() as i64
    }

    /// Cell index of `value` clamped into `[lo, hi)`.
    #[inline]
    #[must_use]
    pub fn to_cell_clamped(&self, value: f64, axis: Axis, lo: i64, hi: i64) -> i64 {
        let cell = self.to_cell(value, axis);
        if cell <= lo {
            lo
        } else if cell >= hi {
            hi - 1
        } else {
            cell
        }
    }

    /// Row/column of data value zero, kept off the outer border where the grid
    /// allows it.
    #[inline]
    #[must_use]
    pub fn zero_cell(&self, axis: Axis) -> i64 {
        let size = self.size(axis);
        self.to_cell_clamped(0.0, axis, 1, size).min(size - 1)
    }

    #[inline]
    #[must_use]
    pub fn size(&self, axis: Axis) -> i64 {
        i64::try_from(self.shape.along(axis)).unwrap_or(i64::MAX)
    }

    // --- Extents ---

    /// Plot extent: expanded limits shrunk by `margin_factor` margin units,
    /// a unit being `expanded_span * margin`.
    #[must_use]
    pub fn extent(&self, margin_factor: f64) -> Extent {
        let shrink = |axis: Axis| {
            let (lo, hi) = self.limits(axis);
            let pad = (hi - lo) * self.margins.along(axis) * margin_factor;
            (lo + pad, hi - pad)
        };
        let (x_min, x_max) = shrink(Axis::X);
        let (y_min, y_max) = shrink(Axis::Y);
        Extent {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The range the caller asked for, with the padding removed exactly.
    #[must_use]
    pub fn data_limits(&self) -> Extent {
        let unpad = |axis: Axis| {
            let (lo, hi) = self.limits(axis);
            let m = self.margins.along(axis);
            let pad = (hi - lo) / 2.0f64.mul_add(m, 1.0) * m;
            (lo + pad, hi - pad)
        };
        let (x_min, x_max) = unpad(Axis::X);
        let (y_min, y_max) = unpad(Axis::Y);
        Extent {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Format the four boundaries of `extent(1)`.
    ///
    /// Values below one in magnitude always use `%+.2g`. Larger values use
    /// `%+.2g` on narrow grids and `%+g` on wide ones. Both label kinds run
    /// horizontally, so both thresholds are on the grid width.
    #[must_use]
    pub fn extent_labels(&self) -> ExtentLabels {
        let e = self.extent(1.0);
        let width = self.shape.width;
        let precision = |min: usize, full: usize| match width {
            w if w < min => None,
            w if w < full => Some(2),
            _ => Some(6),
        };
        let transform = |v: f64, p: usize| {
            if v.abs() < 1.0 {
                format_g(v, 2, true)
            } else {
                format_g(v, p, true)
            }
        };

        ExtentLabels {
            x: precision(X_LABEL_MIN_WIDTH, X_LABEL_FULL_WIDTH)
                .map(|p| (transform(e.x_min, p), transform(e.x_max, p))),
            y: precision(Y_LABEL_MIN_WIDTH, Y_LABEL_FULL_WIDTH)
                .map(|p| (transform(e.y_min, p), transform(e.y_max, p))),
        }
    }

    // --- Bounds tests ---

    #[inline]
    #[must_use]
    pub fn is_inside_buffer(&self, cx: i64, cy: i64) -> bool {
        (0..self.size(Axis::X)).contains(&cx) && (0..self.size(Axis::Y)).contains(&cy)
    }

    /// Half-open test against [`Viewport::data_limits`]. Both bounds are
    /// nudged down by a hair of the span so the caller's own minimum survives
    /// the pad/unpad round trip.
    #[must_use]
    pub fn is_inside_data(&self, x: f64, y: f64) -> bool {
        self.data_window().contains(x, y)
    }

    /// Data limits shifted down by 1e-9 of each span, for half-open tests.
    #[must_use]
    pub fn data_window(&self) -> Extent {
        let d = self.data_limits();
        let tx = (d.x_max - d.x_min) * 1e-9;
        let ty = (d.y_max - d.y_min) * 1e-9;
        Extent {
            x_min: d.x_min - tx,
            x_max: d.x_max - tx,
            y_min: d.y_min - ty,
            y_max: d.y_max - ty,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(GridShape::default(), Margins::default())
    }
}
