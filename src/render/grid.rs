//! Owned character buffer.
//!
//! Stored column-major (x outer, y inner) with y growing upward, the way data
//! space reads. Serialisation flips y and transposes so rows come out
//! top-to-bottom. Writes outside the buffer are dropped, never an error.

use crate::core::viewport::GridShape;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Space-filled buffer.
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        let (width, height) = (shape.width(), shape.height());
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
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
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(x * self.height + y)
    }

    /// Write one cell; returns whether it landed inside the buffer.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, c: char) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = c;
                true
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write `text` rightward from `(x, y)`, one char per cell.
    pub fn put_str(&mut self, x: i64, y: i64, text: &str) {
        for (cx, c) in (x..).zip(text.chars()) {
            self.put(cx, y, c);
        }
    }

    /// Number of cells holding something other than a space.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != ' ').count()
    }

    /// Display rows, top first.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .rev()
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[x * self.height + y])
                    .collect()
            })
            .collect()
    }

    /// Consume the buffer into display text.
    #[must_use]
    pub fn into_text(self, newline: &str) -> String {
        self.rows().join(newline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(GridShape::new(w, h).unwrap())
    }

    #[test]
    fn starts_blank() {
        let g = grid(3, 2);
        assert_eq!(g.filled(), 0);
        assert_eq!(g.into_text("\n"), "   \n   ");
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut g = grid(2, 2);
        assert!(!g.put(-1, 0, 'x'));
        assert!(!g.put(0, 2, 'x'));
        assert!(g.put(1, 1, 'x'));
        assert_eq!(g.filled(), 1);
        g.put_str(1, 0, "abc");
        assert_eq!(g.get(1, 0), Some('a'));
        assert_eq!(g.filled(), 2);
    }

    #[test]
    fn rows_are_flipped_and_transposed() {
        let mut g = grid(3, 2);
        g.put(0, 0, 'a'); // bottom-left
        g.put(2, 1, 'b'); // top-right
        assert_eq!(g.rows(), vec!["  b".to_owned(), "a  ".to_owned()]);
        assert_eq!(g.into_text("|"), "  b|a  ");
    }
}
