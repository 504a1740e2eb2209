//! Character-ramp shading of an already binned or resampled intensity grid.
//!
//! Values are normalised to `[0, 1]` by the grid's own min and max, then
//! looked up in a ramp running from blank to dense. Rows come out in storage
//! order with no flip.

use crate::core::{
    data::Table,
    error::{PlotError, SeriesError},
};

const SHORT_RAMP: &str = " .;-:!>7?CO$QHNM";
const LONG_RAMP: &str = " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Ramp to shade with, lightest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    /// 16 levels.
    #[default]
    Short,
    /// 70 levels.
    Long,
}

impl Palette {
    #[must_use]
    pub fn ramp(self) -> Vec<char> {
        match self {
            Self::Short => SHORT_RAMP.chars().collect(),
            Self::Long => LONG_RAMP.chars().collect(),
        }
    }
}

/// Column-major `width × height` grid of finite values.
#[derive(Clone, Debug, PartialEq)]
pub struct Intensity {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Intensity {
    /// `values[x * height + y]`; the length must be exactly `width * height`.
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> Result<Self, PlotError> {
        if width == 0 || height == 0 || values.len() != width * height {
            return Err(PlotError::IntensityShape {
                width,
                height,
                got: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SeriesError::NonFinite { index, value }.into());
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Each table row becomes one output row, each column one output column.
    pub fn from_table(table: &Table) -> Result<Self, PlotError> {
        let (width, height) = (table.width(), table.rows.len());
        let values = (0..width)
            .flat_map(|x| table.rows.iter().map(move |r| r[x]))
            .collect();
        Self::new(width, height, values)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[x * self.height + y]
    }

    /// Min/max normalised copy; a flat grid maps to all zeros.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (lo, hi) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = hi - lo;
        let values = self
            .values
            .iter()
            .map(|&v| if span > 0.0 { (v - lo) / span } else { 0.0 })
            .collect();
        Self {
            values,
            ..*self
        }
    }

    /// Band normalised values by percentage thresholds.
    ///
    /// With `n` sorted levels, a value at or below the `k`-th level (as a
    /// fraction) lands in band `k`; above every level is band `n`. The result
    /// holds `band / n`, so shading shows `n + 1` flat tones.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentile_levels(&self, levels: &[f64]) -> Self {
        let mut cuts: Vec<f64> = levels.iter().map(|l| l * 0.01).collect();
        cuts.sort_by(f64::total_cmp);
        let n = cuts.len().max(1) as f64;
        let values = self
            .normalized()
            .values
            .into_iter()
            .map(|v| cuts.iter().take_while(|&&c| v > c).count() as f64 / n)
            .collect();
        Self {
            values,
            ..*self
        }
    }
}

/// Shade `im` with `palette`, rows top to bottom in storage order.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_intensity(im: &Intensity, palette: Palette, newline: &str) -> String {
    let ramp = palette.ramp();
    let top = (ramp.len() - 1) as f64;
    let norm = im.normalized();
    (0..norm.height)
        .map(|y| {
            (0..norm.width)
                .map(|x| ramp[((norm.get(x, y) * top) as usize).min(ramp.len() - 1)])
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(newline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_have_expected_lengths() {
        assert_eq!(Palette::Short.ramp().len(), 16);
        assert_eq!(Palette::Long.ramp().len(), 70);
        assert_eq!(Palette::Long.ramp()[0], ' ');
        assert_eq!(Palette::Long.ramp()[69], '$');
    }

    #[test]
    fn shape_is_checked() {
        assert!(matches!(
            Intensity::new(2, 2, vec![0.0; 3]),
            Err(PlotError::IntensityShape { got: 3, .. })
        ));
        assert!(Intensity::new(0, 2, vec![]).is_err());
    }

    #[test]
    fn extremes_map_to_ramp_ends() {
        // column-major: (0,0)=0, (0,1)=0.5, (1,0)=0.25, (1,1)=1
        let im = Intensity::new(2, 2, vec![0.0, 0.5, 0.25, 1.0]).unwrap();
        let out = render_intensity(&im, Palette::Short, "\n");
        assert_eq!(out, " -\n7M");
    }

    #[test]
    fn flat_grid_is_blank() {
        let im = Intensity::new(3, 1, vec![7.0; 3]).unwrap();
        assert_eq!(render_intensity(&im, Palette::Long, "\n"), "   ");
    }

    #[test]
    fn percentile_levels_band_values() {
        let im = Intensity::new(5, 1, vec![0.0, 0.5, 0.7, 0.96, 1.0]).unwrap();
        let banded = im.percentile_levels(&[95.0, 68.0]);
        let got: Vec<f64> = (0..5).map(|x| banded.get(x, 0)).collect();
        assert_eq!(got, vec![0.0, 0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn table_rows_become_output_rows() {
        let t = Table {
            headers: None,
            rows: vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]],
        };
        let im = Intensity::from_table(&t).unwrap();
        assert_eq!((im.width(), im.height()), (3, 2));
        assert!((im.get(2, 0) - 2.0).abs() < f64::EPSILON);
        assert!((im.get(0, 1) - 3.0).abs() < f64::EPSILON);
    }
}
