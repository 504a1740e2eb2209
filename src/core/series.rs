//! One plotted data set: aligned coordinates, glyph rule, style and label.

use std::{fmt, str::FromStr};

use crate::core::{
    bounds::Axis,
    error::{ConfigError, SeriesError},
};

/// Named glyph table, addressed as `_name` in glyph strings.
pub const NAMED_GLYPHS: &[(&str, char)] = &[
    (".", '∘'),
    (",", '∙'),
    ("o", '○'),
    ("of", '●'),
    ("v", '▽'),
    ("vf", '▼'),
    ("^", '△'),
    ("^f", '▲'),
    ("<", '◁'),
    ("<f", '◀'),
    (">", '▷'),
    (">f", '▶'),
    ("s", '◽'),
    ("sf", '◼'),
    ("*", '☆'),
    ("*f", '★'),
    ("+", '✚'),
    ("x", '✕'),
    ("d", '◇'),
    ("df", '◆'),
    ("-", '⎼'),
    ("#", '█'),
];

/// Drawn for [`Glyph::Auto`] when no slope glyph applies.
pub const AUTO_FALLBACK: char = '·';

/// How a series picks its glyph. Resolved once, when the series is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Glyph chosen per segment from its slope.
    Auto,
    /// Entry from [`NAMED_GLYPHS`].
    Named { name: &'static str, glyph: char },
    Literal(char),
}

impl Glyph {
    /// Look up `name` in the named table.
    pub fn named(name: &str) -> Result<Self, ConfigError> {
        NAMED_GLYPHS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(name, glyph)| Self::Named { name, glyph })
            .ok_or_else(|| ConfigError::UnknownGlyph(name.to_owned()))
    }

    /// The character written for this glyph when it is drawn literally.
    #[inline]
    #[must_use]
    pub const fn char(self) -> char {
        match self {
            Self::Auto => AUTO_FALLBACK,
            Self::Named { glyph, .. } | Self::Literal(glyph) => glyph,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::Named {
            name: ".",
            glyph: '∘',
        }
    }
}

/// `""`/`"None"` → auto, `"_name"` → named table, otherwise one literal char.
impl FromStr for Glyph {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "None" {
            return Ok(Self::Auto);
        }
        if let Some(name) = s.strip_prefix('_') {
            return Self::named(name);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Literal(c)),
            _ => Err(ConfigError::MultiCharGlyph(s.to_owned())),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Named { name, glyph } => write!(f, "_{name} ({glyph})"),
            Self::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// How the points of a series are put on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    /// Each point on its own, literal glyph.
    Points,
    /// Points sorted by x and joined by slope glyphs.
    Lines,
    /// Columns filled from the x-axis up (or down) to each point.
    /// `width` is in data units.
    Bars { width: f64 },
}

/// Immutable data set. Build it, then hand it to a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    glyph: Glyph,
    style: Style,
    label: Option<String>,
}

impl Series {
    /// Aligned `x`/`y`; both must be the same non-zero length and finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SeriesError> {
        if x.len() != y.len() {
            return Err(SeriesError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(SeriesError::Empty);
        }
        if let Some((index, &value)) = x
            .iter()
            .chain(y.iter())
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(SeriesError::NonFinite {
                index: index % x.len(),
                value,
            });
        }
        Ok(Self {
            x,
            y,
            glyph: Glyph::default(),
            style: Style::Lines,
            label: None,
        })
    }

    /// `y` against its index `0, 1, 2, …`.
    pub fn from_y(y: Vec<f64>) -> Result<Self, SeriesError> {
        #[allow(clippy::cast_precision_loss)]
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self::new(x, y)
    }

    /// An auto glyph has nothing to draw for isolated points, so it forces
    /// connected lines.
    #[must_use]
    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = glyph;
        if glyph == Glyph::Auto && self.style == Style::Points {
            self.style = Style::Lines;
        }
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = if self.glyph == Glyph::Auto && style == Style::Points {
            Style::Lines
        } else {
            style
        };
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.x
    }

    #[inline]
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.y
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction rejects empty series.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn glyph_rule(&self) -> Glyph {
        self.glyph
    }

    #[inline]
    #[must_use]
    pub const fn draw_style(&self) -> Style {
        self.style
    }

    /// The label, if any and non-empty.
    #[inline]
    #[must_use]
    pub fn legend_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    /// Points in insertion order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Points ordered by x; ties keep insertion order.
    #[must_use]
    pub fn sorted_points(&self) -> Vec<(f64, f64)> {
        let mut pts: Vec<_> = self.points().collect();
        pts.sort_by(|a, b| a.0.total_cmp(&b.0));
        pts
    }

    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        min_max(&self.x)
    }

    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        min_max(&self.y)
    }

    /// Range the figure must show for this series: bars also need their full
    /// width and the zero baseline.
    #[must_use]
    pub fn fit_range(&self, axis: Axis) -> (f64, f64) {
        match (axis, self.style) {
            (Axis::X, Style::Bars { width }) => {
                let (lo, hi) = self.x_range();
                (lo - width.abs() / 2.0, hi + width.abs() / 2.0)
            }
            (Axis::Y, Style::Bars { .. }) => {
                let (lo, hi) = self.y_range();
                (lo.min(0.0), hi.max(0.0))
            }
            (Axis::X, _) => self.x_range(),
            (Axis::Y, _) => self.y_range(),
        }
    }
}

#[inline]
fn min_max(v: &[f64]) -> (f64, f64) {
    v.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}
