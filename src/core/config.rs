//! Figure configuration object + fluent builder.

use crate::core::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X_MARGIN, DEFAULT_Y_MARGIN},
    error::ConfigError,
    viewport::{GridShape, Margins},
};

/// Immutable parameters a [`Figure`](crate::Figure) is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub shape: GridShape,
    pub margins: Margins,
    pub draw_axes: bool,
    pub draw_labels: bool,
    pub newline: String,
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
}

impl FigureConfig {
    #[inline]
    pub fn builder() -> FigureConfigBuilder {
        FigureConfigBuilder::new()
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::default(),
            margins: Margins::default(),
            draw_axes: true,
            draw_labels: true,
            newline: "\n".to_owned(),
            x_range: None,
            y_range: None,
        }
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct FigureConfigBuilder {
    width: usize,
    height: usize,
    x_margin: f64,
    y_margin: f64,
    draw_axes: bool,
    draw_labels: bool,
    newline: Option<String>,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl FigureConfigBuilder {
    pub(crate) const fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x_margin: DEFAULT_X_MARGIN,
            y_margin: DEFAULT_Y_MARGIN,
            draw_axes: true,
            draw_labels: true,
            newline: None,
            x_range: None,
            y_range: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn shape(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    #[inline]
    #[must_use]
    pub const fn margins(mut self, x: f64, y: f64) -> Self {
        self.x_margin = x;
        self.y_margin = y;
        self
    }
    #[inline]
    #[must_use]
    pub const fn draw_axes(mut self, on: bool) -> Self {
        self.draw_axes = on;
        self
    }
    #[inline]
    #[must_use]
    pub const fn draw_labels(mut self, on: bool) -> Self {
        self.draw_labels = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn newline(mut self, sep: impl Into<String>) -> Self {
        self.newline = Some(sep.into());
        self
    }
    #[inline]
    #[must_use]
    pub const fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub const fn y_range(mut self, lo: f64, hi: f64) -> Self {
        self.y_range = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub const fn x_range_opt(mut self, r: Option<(f64, f64)>) -> Self {
        if r.is_some() {
            self.x_range = r;
        }
        self
    }
    #[inline]
    #[must_use]
    pub const fn y_range_opt(mut self, r: Option<(f64, f64)>) -> Self {
        if r.is_some() {
            self.y_range = r;
        }
        self
    }

    pub fn build(self) -> Result<FigureConfig, ConfigError> {
        let shape = GridShape::new(self.width, self.height)?;
        let margins = Margins::new(self.x_margin, self.y_margin)?;
        for (axis, range) in [('x', self.x_range), ('y', self.y_range)] {
            if let Some((low, high)) = range {
                if !low.is_finite() || !high.is_finite() {
                    return Err(ConfigError::NonFiniteRange { axis, low, high });
                }
                if low > high {
                    return Err(ConfigError::InvalidRange { axis, low, high });
                }
            }
        }
        Ok(FigureConfig {
            shape,
            margins,
            draw_axes: self.draw_axes,
            draw_labels: self.draw_labels,
            newline: self.newline.unwrap_or_else(|| "\n".to_owned()),
            x_range: self.x_range,
            y_range: self.y_range,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<FigureConfigBuilder> for Result<FigureConfig, ConfigError> {
    fn from(b: FigureConfigBuilder) -> Self {
        b.build()
    }
}
