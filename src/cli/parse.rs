use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X_MARGIN, DEFAULT_Y_MARGIN};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-plot",
    version,
    about = "Fixed-size character-grid plots in the terminal"
)]
pub struct Cli {
    /// Log at debug level and print timings to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot columns from a CSV file
    Csv(CsvArgs),
    /// Shade a matrix of intensities from a CSV file
    Heatmap(HeatmapArgs),
    /// Sine wave and a seeded random walk, with a legend
    Demo(DemoArgs),
    /// List the named markers (`_name`)
    Markers,
    /// Print example invocations
    Examples,
}

/// How series from the CSV are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PlotStyle {
    /// Points joined by slope glyphs
    #[default]
    Line,
    /// Bare markers
    Scatter,
    /// Flat steps between midpoints
    Step,
    /// Vertical stems from zero
    Stem,
    /// Filled columns from zero
    Bar,
}

/// Shared grid and axis options.
#[derive(Args, Debug, Clone)]
pub struct FigureArgs {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,
    /// Size the grid to the terminal (overrides width/height)
    #[arg(long)]
    pub fit: bool,

    /// Horizontal margin, fraction of the x span
    #[arg(long, default_value_t = DEFAULT_X_MARGIN)]
    pub x_margin: f64,
    /// Vertical margin, fraction of the y span
    #[arg(long, default_value_t = DEFAULT_Y_MARGIN)]
    pub y_margin: f64,

    /// X-axis lower bound (needs --x-max)
    #[arg(long, requires = "x_max", allow_hyphen_values = true)]
    pub x_min: Option<f64>,
    /// X-axis upper bound (needs --x-min)
    #[arg(long, requires = "x_min", allow_hyphen_values = true)]
    pub x_max: Option<f64>,
    /// Y-axis lower bound (needs --y-max)
    #[arg(long, requires = "y_max", allow_hyphen_values = true)]
    pub y_min: Option<f64>,
    /// Y-axis upper bound (needs --y-min)
    #[arg(long, requires = "y_min", allow_hyphen_values = true)]
    pub y_max: Option<f64>,

    /// Do not draw the axes
    #[arg(long)]
    pub no_axes: bool,
    /// Do not draw tick labels or the legend
    #[arg(long)]
    pub no_labels: bool,
}

/// `ascii-plot csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Drawing style
    #[arg(short, long, value_enum, default_value_t = PlotStyle::Line)]
    pub style: PlotStyle,

    /// Marker: one character, `_name` from `markers`, or `None` for slope glyphs
    #[arg(short, long, default_value = "_.", allow_hyphen_values = true)]
    pub marker: String,

    /// Bar width as a fraction of the mean spacing
    #[arg(long, default_value_t = 0.8)]
    pub bar_width: f64,

    /// Label for a headerless single series
    #[arg(short, long)]
    pub label: Option<String>,

    #[command(flatten)]
    pub figure: FigureArgs,
}

/// Ramp used by `heatmap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RampArg {
    /// 16 levels
    #[default]
    Short,
    /// 70 levels
    Long,
}

/// `ascii-plot heatmap …`
#[derive(Parser, Debug)]
pub struct HeatmapArgs {
    /// CSV path (use `-` for stdin); every row must have the same width
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[arg(long, value_enum, default_value_t = RampArg::Short)]
    pub ramp: RampArg,

    /// Band by percentage levels instead of shading continuously, e.g. `68,95,99`
    #[arg(long, value_delimiter = ',')]
    pub levels: Vec<f64>,
}

/// `ascii-plot demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Random-walk steps
    #[arg(long, default_value_t = 200)]
    pub steps: usize,
    /// Random-walk step deviation
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    /// Fixed RNG seed (time-seeded when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub figure: FigureArgs,
}
