//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::Axis,
    config::{FigureConfig, FigureConfigBuilder},
    data::{ParseCsvError, Table, read_table, read_table_from_path},
    error::{ConfigError, PlotError, SeriesError},
    series::{Glyph, NAMED_GLYPHS, Series, Style},
    viewport::{Extent, GridShape, Margins, Viewport},
};

pub use crate::render::{
    Figure, Grid, HistStyle, Intensity, Palette, bar_series, histogram, render_intensity,
    stemify, steppify,
};

/// Render one series with `cfg` and return the text. Limits auto-fit unless
/// `cfg` pins them.
pub fn plot(cfg: FigureConfig, series: Series) -> Result<String, PlotError> {
    let mut fig = Figure::new(cfg)?;
    fig.append(series)?;
    Ok(fig.render())
}
