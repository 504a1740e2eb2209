//! Figure: the viewport, the appended series and the render flags.
//!
//! The grid never outlives a call to [`Figure::render`]; everything a render
//! needs is read from `&self`, so repeated renders are byte identical.

use std::time::Instant;

use tracing::debug;

use crate::{
    core::{
        bounds::Axis,
        config::FigureConfig,
        error::{ConfigError, PlotError},
        series::{Glyph, Series, Style},
        viewport::Viewport,
    },
    render::{annotate::Annotator, grid::Grid, raster::Rasterizer},
};

#[derive(Clone, Debug)]
pub struct Figure {
    viewport: Viewport,
    series: Vec<Series>,
    draw_axes: bool,
    draw_labels: bool,
    newline: String,
    auto_adjust: bool,
    pinned: [bool; 2],
}

impl Figure {
    /// Explicit ranges in `cfg` are applied now and pin their axis.
    pub fn new(cfg: FigureConfig) -> Result<Self, ConfigError> {
        let mut fig = Self {
            viewport: Viewport::new(cfg.shape, cfg.margins),
            series: Vec::new(),
            draw_axes: cfg.draw_axes,
            draw_labels: cfg.draw_labels,
            newline: cfg.newline,
            auto_adjust: true,
            pinned: [false; 2],
        };
        if let Some((lo, hi)) = cfg.x_range {
            fig.set_limits(Axis::X, lo, hi)?;
        }
        if let Some((lo, hi)) = cfg.y_range {
            fig.set_limits(Axis::Y, lo, hi)?;
        }
        Ok(fig)
    }

    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Turning auto-fit on refits every axis that is not pinned.
    pub fn set_auto_adjust(&mut self, on: bool) -> Result<(), ConfigError> {
        if on {
            self.viewport = self.fitted(self.pinned)?;
        }
        self.auto_adjust = on;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn auto_adjust(&self) -> bool {
        self.auto_adjust
    }

    /// Add a series; with auto-fit on, the unpinned limits grow to the union
    /// of every series so far. A series whose limits cannot be fitted is
    /// rejected and the figure is left as it was.
    pub fn append(&mut self, series: Series) -> Result<(), ConfigError> {
        debug!(
            points = series.len(),
            label = series.legend_label().unwrap_or(""),
            "append series"
        );
        self.series.push(series);
        if !self.auto_adjust {
            return Ok(());
        }
        match self.fitted(self.pinned) {
            Ok(vp) => {
                self.viewport = vp;
                Ok(())
            }
            Err(e) => {
                self.series.pop();
                Err(e)
            }
        }
    }

    /// Build a series from parts and append it.
    pub fn plot(
        &mut self,
        x: Vec<f64>,
        y: Vec<f64>,
        glyph: Glyph,
        style: Style,
        label: Option<&str>,
    ) -> Result<(), PlotError> {
        let mut s = Series::new(x, y)?.glyph(glyph).style(style);
        if let Some(l) = label {
            s = s.label(l);
        }
        Ok(self.append(s)?)
    }

    pub fn set_x_limits(&mut self, low: f64, high: f64) -> Result<(), ConfigError> {
        self.set_limits(Axis::X, low, high)
    }

    pub fn set_y_limits(&mut self, low: f64, high: f64) -> Result<(), ConfigError> {
        self.set_limits(Axis::Y, low, high)
    }

    /// Explicit limits pin the axis; auto-fit no longer touches it.
    pub fn set_limits(&mut self, axis: Axis, low: f64, high: f64) -> Result<(), ConfigError> {
        self.viewport.set_limits(axis, low, high)?;
        self.pinned[axis as usize] = true;
        debug!(axis = %axis.letter(), low, high, "limits pinned");
        Ok(())
    }

    /// Hand an axis back to auto-fit.
    pub fn unpin(&mut self, axis: Axis) -> Result<(), ConfigError> {
        let mut pinned = self.pinned;
        pinned[axis as usize] = false;
        if self.auto_adjust {
            self.viewport = self.fitted(pinned)?;
        }
        self.pinned = pinned;
        Ok(())
    }

    /// Shift the view by fractions of the current span. Pins both axes.
    pub fn pan(&mut self, x_fraction: f64, y_fraction: f64) {
        self.viewport.pan(x_fraction, y_fraction);
        self.pinned = [true; 2];
    }

    /// Scale both spans about their centres. Pins both axes.
    pub fn zoom(&mut self, factor: f64) -> Result<(), ConfigError> {
        self.viewport.zoom(factor)?;
        self.pinned = [true; 2];
        Ok(())
    }

    /// The viewport refitted to every series on each axis not in `pinned`.
    /// Built on a copy so a failure on either axis changes nothing.
    fn fitted(&self, pinned: [bool; 2]) -> Result<Viewport, ConfigError> {
        let mut vp = self.viewport.clone();
        for axis in [Axis::X, Axis::Y] {
            if pinned[axis as usize] {
                continue;
            }
            if let Some((lo, hi)) = axis.bounds(&self.series) {
                vp.set_limits(axis, lo, hi)?;
                debug!(axis = %axis.letter(), lo, hi, "auto-fit");
            }
        }
        Ok(vp)
    }

    /// Allocate a blank grid, draw axes and series, annotate, serialise.
    #[must_use]
    pub fn render(&self) -> String {
        let start = Instant::now();
        let vp = &self.viewport;

        let mut raster = Rasterizer::new(vp, Grid::new(vp.shape()), self.draw_axes);
        if self.draw_axes {
            raster.draw_axes();
        }
        for s in &self.series {
            raster.draw_series(s);
        }

        let mut grid = raster.into_grid();
        if self.draw_labels {
            let mut notes = Annotator::new(vp, grid);
            notes.draw_extent_labels();
            notes.draw_legend(&self.series);
            grid = notes.into_grid();
        }

        let text = grid.into_text(&self.newline);
        debug!(
            series = self.series.len(),
            elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "render"
        );
        text
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            series: Vec::new(),
            draw_axes: true,
            draw_labels: true,
            newline: "\n".to_owned(),
            auto_adjust: true,
            pinned: [false; 2],
        }
    }
}
