pub mod annotate;
pub mod clip;
pub mod figure;
pub mod grid;
pub mod raster;
pub mod shade;
pub mod shapes;

pub use annotate::Annotator;
pub use clip::{Point, clip};
pub use figure::Figure;
pub use grid::Grid;
pub use raster::{LineOutcome, Rasterizer, glyph_for_slope};
pub use shade::{Intensity, Palette, render_intensity};
pub use shapes::{BAR_GLYPH, HistStyle, bar_series, histogram, stemify, steppify};
