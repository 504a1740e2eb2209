//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::data::ParseCsvError;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid shape must be at least 1×1, got {width}×{height}")]
    InvalidShape { width: usize, height: usize },

    #[error("{axis} margin {value} must lie in [0, 1)")]
    InvalidMargin { axis: char, value: f64 },

    #[error("{axis} limits must be finite, got [{low}, {high}]")]
    NonFiniteRange { axis: char, low: f64, high: f64 },

    #[error("{axis}_min {low} must be <= {axis}_max {high}")]
    InvalidRange { axis: char, low: f64, high: f64 },

    #[error("{axis} range at {value} cannot be widened to a non-zero span")]
    DegenerateRange { axis: char, value: f64 },

    #[error("zoom factor {0} must be finite and > 0")]
    InvalidZoom(f64),

    #[error("unknown named glyph `{0}`")]
    UnknownGlyph(String),

    #[error("glyph `{0}` must be a single character")]
    MultiCharGlyph(String),
}

/// Series construction faults.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("series has no points")]
    Empty,

    #[error("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    #[error("{what} needs at least {need} points, got {got}")]
    TooFewPoints {
        what: &'static str,
        need: usize,
        got: usize,
    },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] ParseCsvError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("intensity grid is {got} values, expected {width}×{height}")]
    IntensityShape {
        width: usize,
        height: usize,
        got: usize,
    },
}
