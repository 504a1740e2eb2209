//! Aggregates the “business logic” layer: data model, limits and errors.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod rng;
pub mod series;
pub mod viewport;

// re-export frequently-used items for convenience
pub use bounds::Axis;
pub use config::{FigureConfig, FigureConfigBuilder};
pub use data::{Table, read_table, read_table_from_path};
pub use error::{ConfigError, PlotError, SeriesError};
pub use series::{Glyph, NAMED_GLYPHS, Series, Style};
pub use viewport::{Extent, ExtentLabels, GridShape, Margins, Viewport};
