//! Memory-efficient CSV loader with zero-allocation float parsing.
//!
//! Any number of comma-separated numeric columns; `#` lines are comments and
//! a first row whose leading field is not a number is taken as a header.

use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

use crate::core::{error::SeriesError, series::Series};

// --- Public Table ---

/// Parsed numeric rows, every row the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[index]).collect()
    }

    fn header(&self, index: usize) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get(index))
            .map(String::as_str)
            .filter(|h| !h.is_empty())
    }

    /// One column → y against row index. Otherwise column 0 is x and every
    /// further column is its own series, labelled by its header when present.
    pub fn to_series(&self) -> Result<Vec<Series>, SeriesError> {
        match self.width() {
            0 => Err(SeriesError::Empty),
            1 => {
                let s = Series::from_y(self.column(0))?;
                Ok(vec![match self.header(0) {
                    Some(h) => s.label(h),
                    None => s,
                }])
            }
            w => {
                let x = self.column(0);
                (1..w)
                    .map(|c| {
                        let s = Series::new(x.clone(), self.column(c))?;
                        Ok(match self.header(c) {
                            Some(h) => s.label(h),
                            None => s,
                        })
                    })
                    .collect()
            }
        }
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("expected {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("invalid value '{text}' in column {column}")]
    BadFloat { column: usize, text: String },
    #[error("no numeric rows")]
    Empty,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Rewrite U+2212 MINUS SIGN as ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, column: usize) -> Result<f64, ParseCsvError> {
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_table<R: Read>(src: R) -> Result<Table, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut table = Table {
        headers: None,
        rows: Vec::new(),
    };
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        let fields: Vec<&[u8]> = buf.split(|&b| b == b',').map(trim).collect();

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(fields[0]).is_err() {
                table.headers = Some(
                    fields
                        .iter()
                        .map(|f| String::from_utf8_lossy(f).into_owned())
                        .collect(),
                );
                continue;
            }
        }

        let expected = table.rows.first().map_or(fields.len(), Vec::len);
        if fields.len() != expected {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    expected,
                    got: fields.len(),
                },
            });
        }

        let row = fields
            .iter()
            .enumerate()
            .map(|(column, f)| parse_f64(f, line_no, column + 1))
            .collect::<Result<Vec<_>, _>>()?;
        table.rows.push(row);
    }
    if table.rows.is_empty() {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(table)
}

/// `-` reads stdin.
pub fn read_table_from_path(path: &str) -> Result<Table, ParseCsvError> {
    if path == "-" {
        read_table(std::io::stdin())
    } else {
        use std::fs::File;
        read_table(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_comments_and_rows() {
        let src = "# sensor dump\nt, temp, load\n0, 1.5, 2\n1, −2, 3\n\n2,4,5\r\n";
        let t = read_table(src.as_bytes()).unwrap();
        assert_eq!(
            t.headers,
            Some(vec!["t".into(), "temp".into(), "load".into()])
        );
        assert_eq!(t.rows.len(), 3);
        assert_eq!(t.rows[1], vec![1.0, -2.0, 3.0]);
        assert_eq!(t.column(2), vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = read_table("1,2\n3\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadColumnCount {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn bad_floats_name_their_column() {
        let err = read_table("1,2\n3,x\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFloat { column: 2, ref text } if text == "x"
        ));
        let err = read_table("1,inf\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { column: 2, .. }));
    }

    #[test]
    fn header_only_input_is_empty() {
        let err = read_table("a,b\n# nothing\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Empty));
    }

    #[test]
    fn columns_become_labelled_series() {
        let t = read_table("x,up,down\n0,0,3\n1,1,2\n2,2,1\n".as_bytes()).unwrap();
        let series = t.to_series().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].legend_label(), Some("up"));
        assert_eq!(series[1].ys(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn single_column_plots_against_index() {
        let t = read_table("5\n6\n7\n".as_bytes()).unwrap();
        let series = t.to_series().unwrap();
        assert_eq!(series[0].xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(series[0].legend_label(), None);
    }
}
