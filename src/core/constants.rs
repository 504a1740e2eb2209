//! A collection of constants.

/// Default grid width in character cells
pub const DEFAULT_WIDTH: usize = 50;
/// Default grid height in character cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Fraction of the x span padded on each side of the plot extent
pub const DEFAULT_X_MARGIN: f64 = 0.05;
/// Fraction of the y span padded on each side of the plot extent
pub const DEFAULT_Y_MARGIN: f64 = 0.1;

// --- Axis glyphs ---

/// Horizontal axis line
pub const X_AXIS_GLYPH: char = '─';
/// Vertical axis line
pub const Y_AXIS_GLYPH: char = '│';
/// Axis crossing and extent tick marker
pub const TICK_GLYPH: char = '┼';

// --- Slope glyphs ---

/// Steep segments, either direction
pub const VERTICAL_GLYPH: char = '|';
/// Shallow segments
pub const HORIZONTAL_GLYPH: char = '-';
/// Rising diagonal band
pub const RISING_GLYPH: char = '⟋';
/// Falling diagonal band
pub const FALLING_GLYPH: char = '⟍';

/// Marker that gets swapped for [`AXIS_CROSSING_SUBSTITUTE`] on the x-axis row.
pub const AXIS_CROSSING_MARKER: char = '⎼';
pub const AXIS_CROSSING_SUBSTITUTE: char = '=';

/// Points closer than this along x are treated as vertically stacked.
pub const SLOPE_EPSILON: f64 = 1e-6;

// --- Extent label thresholds (measured on grid width) ---

/// No x labels below this width
pub const X_LABEL_MIN_WIDTH: usize = 16;
/// Short x label format below this width
pub const X_LABEL_FULL_WIDTH: usize = 23;
/// No y labels below this width
pub const Y_LABEL_MIN_WIDTH: usize = 8;
/// Short y label format below this width
pub const Y_LABEL_FULL_WIDTH: usize = 11;

/// Columns reserved right of the longest legend label
pub const LEGEND_RIGHT_PAD: usize = 4;
