//! Array reshaping for step, stem, bar and pre-binned histogram plots.
//!
//! Nothing here draws; each helper only builds the coordinates or the
//! [`Series`] that the rasterizer then handles like any other.

use crate::core::{
    error::SeriesError,
    series::{Glyph, Series, Style},
};

/// Glyph used for bar columns.
pub const BAR_GLYPH: char = '█';

/// How [`histogram`] presents pre-binned counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistStyle {
    /// A vertical line from zero to each count.
    #[default]
    Stem,
    /// Flat steps between bin midpoints.
    Step,
    /// A bare marker at each count.
    Points,
}

fn same_len(x: &[f64], y: &[f64]) -> Result<(), SeriesError> {
    if x.len() == y.len() {
        Ok(())
    } else {
        Err(SeriesError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        })
    }
}

/// Step outline with `2n` points.
///
/// Each value is held flat from the midpoint before its `x` to the midpoint
/// after it. The outer edges mirror the first and last midpoints.
pub fn steppify(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>), SeriesError> {
    same_len(x, y)?;
    let n = x.len();
    if n < 2 {
        return Err(SeriesError::TooFewPoints {
            what: "a step plot",
            need: 2,
            got: n,
        });
    }
    let mids: Vec<f64> = x.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
    let (first, last) = (x[0], x[n - 1]);

    let mut xx = Vec::with_capacity(2 * n);
    xx.push(2.0f64.mul_add(first, -mids[0]));
    for &m in &mids {
        xx.extend([m, m]);
    }
    xx.push(2.0f64.mul_add(last, -mids[n - 2]));

    let yy = y.iter().flat_map(|&v| [v, v]).collect();
    Ok((xx, yy))
}

/// `3n` points: `(x, 0), (x, y), (x, 0)` for every input point.
pub fn stemify(x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>), SeriesError> {
    same_len(x, y)?;
    let xx = x.iter().flat_map(|&v| [v, v, v]).collect();
    let yy = y.iter().flat_map(|&v| [0.0, v, 0.0]).collect();
    Ok((xx, yy))
}

/// Bars centred on `x`. Width is `width_fraction` of the mean spacing, or
/// `width_fraction` itself in data units for a single bar.
pub fn bar_series(x: &[f64], heights: &[f64], width_fraction: f64) -> Result<Series, SeriesError> {
    same_len(x, heights)?;
    #[allow(clippy::cast_precision_loss)]
    let width = if x.len() > 1 {
        let (lo, hi) = x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        (hi - lo) / x.len() as f64 * width_fraction
    } else {
        width_fraction
    };
    Ok(Series::new(x.to_vec(), heights.to_vec())?
        .glyph(Glyph::Literal(BAR_GLYPH))
        .style(Style::Bars { width }))
}

/// Series for counts already binned at `centers`.
pub fn histogram(centers: &[f64], counts: &[f64], style: HistStyle) -> Result<Series, SeriesError> {
    match style {
        HistStyle::Stem => {
            let (x, y) = stemify(centers, counts)?;
            Series::new(x, y)
        }
        HistStyle::Step => {
            let (x, y) = steppify(centers, counts)?;
            Series::new(x, y)
        }
        HistStyle::Points => {
            Ok(Series::new(centers.to_vec(), counts.to_vec())?.style(Style::Points))
        }
    }
}
