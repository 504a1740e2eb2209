use std::time::Instant;

use tracing::{debug, info};

use crate::{
    core::{
        bounds::default_shape,
        config::FigureConfig,
        data::read_table_from_path,
        error::{ConfigError, PlotError},
        rng::Lcg,
        series::{Glyph, NAMED_GLYPHS, Series, Style},
    },
    render::{Figure, Intensity, Palette, bar_series, render_intensity, stemify, steppify},
};

use super::parse::{CsvArgs, DemoArgs, FigureArgs, HeatmapArgs, PlotStyle, RampArg};

fn figure_config(a: &FigureArgs) -> Result<FigureConfig, ConfigError> {
    let (width, height) = if a.fit {
        default_shape(true)
    } else {
        (a.width, a.height)
    };
    FigureConfig::builder()
        .shape(width, height)
        .margins(a.x_margin, a.y_margin)
        .draw_axes(!a.no_axes)
        .draw_labels(!a.no_labels)
        .x_range_opt(a.x_min.zip(a.x_max))
        .y_range_opt(a.y_min.zip(a.y_max))
        .build()
}

/// Re-shape one parsed column pair for the requested style.
fn styled(s: Series, style: PlotStyle, glyph: Glyph, bar_width: f64) -> Result<Series, PlotError> {
    let label = s.legend_label().map(str::to_owned);
    let out = match style {
        PlotStyle::Line => s.glyph(glyph).style(Style::Lines),
        PlotStyle::Scatter => s.glyph(glyph).style(Style::Points),
        PlotStyle::Step => {
            let (x, y) = steppify(s.xs(), s.ys())?;
            Series::new(x, y)?.glyph(glyph)
        }
        PlotStyle::Stem => {
            let (x, y) = stemify(s.xs(), s.ys())?;
            Series::new(x, y)?.glyph(glyph)
        }
        PlotStyle::Bar => bar_series(s.xs(), s.ys(), bar_width)?,
    };
    Ok(match label {
        Some(l) => out.label(l),
        None => out,
    })
}

pub fn csv(a: &CsvArgs, debug_timing: bool) -> Result<(), PlotError> {
    let t_ingest = Instant::now();
    let table = read_table_from_path(&a.file)?;
    let dur_ingest = t_ingest.elapsed().as_micros();
    debug!(rows = table.rows.len(), columns = table.width(), "csv loaded");

    let glyph: Glyph = a.marker.parse()?;
    let mut series = table.to_series()?;
    if let (Some(l), 1) = (a.label.as_deref(), series.len()) {
        series = series
            .into_iter()
            .map(|s| if s.legend_label().is_some() { s } else { s.label(l) })
            .collect();
    }

    let t_render = Instant::now();
    let mut fig = Figure::new(figure_config(&a.figure)?)?;
    for s in series {
        fig.append(styled(s, a.style, glyph, a.bar_width)?)?;
    }
    let text = fig.render();
    let dur_render = t_render.elapsed().as_micros();

    println!("{text}");
    if debug_timing {
        eprintln!(
            "CSV ingest: {dur_ingest} µs   render: {dur_render} µs   ({} rows)",
            table.rows.len()
        );
    }
    Ok(())
}

pub fn heatmap(a: &HeatmapArgs, debug_timing: bool) -> Result<(), PlotError> {
    let t0 = Instant::now();
    let table = read_table_from_path(&a.file)?;
    let mut im = Intensity::from_table(&table)?;
    if !a.levels.is_empty() {
        im = im.percentile_levels(&a.levels);
    }
    let palette = match a.ramp {
        RampArg::Short => Palette::Short,
        RampArg::Long => Palette::Long,
    };
    println!("{}", render_intensity(&im, palette, "\n"));
    if debug_timing {
        eprintln!(
            "heatmap {}×{}: {} µs",
            im.width(),
            im.height(),
            t0.elapsed().as_micros()
        );
    }
    Ok(())
}

pub fn demo(a: &DemoArgs, debug_timing: bool) -> Result<(), PlotError> {
    let t0 = Instant::now();
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let steps = a.steps.max(2);
    let (wave, walk) = rng.demo_series(steps, a.sigma)?;

    let mut fig = Figure::new(figure_config(&a.figure)?)?;
    fig.append(wave.glyph(Glyph::Auto).label("sine"))?;
    fig.append(
        walk.glyph(Glyph::default())
            .style(Style::Points)
            .label("random walk"),
    )?;
    info!(steps, sigma = a.sigma, "demo figure built");
    println!("{}", fig.render());

    if debug_timing {
        eprintln!("demo: {steps} steps   total {} µs", t0.elapsed().as_micros());
    }
    Ok(())
}

/// Print every named marker next to its glyph.
pub fn markers() {
    println!("\nNamed markers (pass as `--marker _name`):");
    for (name, glyph) in NAMED_GLYPHS {
        println!("  _{name:<3} {glyph}");
    }
    println!("  None  slope glyphs (lines only)");
    println!("  <c>   any single character is drawn as-is\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-plot";
    println!(
        "
Example invocations
-------------------
• Line plot        : {bin} csv data.csv
• Scatter, marker  : {bin} csv data.csv --style scatter --marker _of
• Slope glyphs     : {bin} csv data.csv --marker None
• Bars             : {bin} csv counts.csv --style bar --bar-width 0.6
• Fixed limits     : {bin} csv data.csv --x-min 0 --x-max 10 --y-min -1 --y-max 1
• Fit to terminal  : {bin} csv data.csv --fit --no-labels
• From stdin       : seq 1 20 | {bin} csv -
• Heatmap          : {bin} heatmap matrix.csv --ramp long
• Percentile bands : {bin} heatmap matrix.csv --levels 68,95,99
• Demo             : {bin} demo --seed 7 --steps 300
• Debug timings    : {bin} --debug csv data.csv
"
    );
}
