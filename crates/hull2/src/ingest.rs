//! Point files: tolerant reader and hull text dump.
//!
//! Reader rules
//! - Records end at `\r\n`, `\n` or a lone `\r`.
//! - Records are trimmed; blank records are skipped.
//! - Tokens are separated by any run of commas, whitespace and the ASCII
//!   separators `\x1c`..=`\x1f`.
//! - The first two tokens must both be base-10 integers, otherwise the record
//!   is dropped without error. Extra tokens are ignored.
//! - A leading comma produces an empty first token, so such records are dropped.
//! - Coordinates must fit in `i64`. Well-formed integers outside that range are
//!   reported separately (`Record::OutOfRange`) so callers can warn about them.
//!
//! Only I/O failures of the source itself (missing file, invalid UTF-8) are
//! reported as errors.

use std::io::{self, BufRead, Read, Write};
use std::num::{IntErrorKind, ParseIntError};
use std::sync::LazyLock;

use regex::Regex;

use crate::geom2::{Hull, Point};

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break regex"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s\x1c-\x1f]+").expect("valid separator regex"));

/// Classification of one input record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    Blank,
    Point(Point),
    Malformed,
    /// Both tokens are integers but at least one does not fit in `i64`.
    OutOfRange,
}

impl Record {
    #[inline]
    pub fn point(self) -> Option<Point> {
        match self {
            Record::Point(p) => Some(p),
            _ => None,
        }
    }
}

#[inline]
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Records of `text`, split the way text-mode readers split lines.
fn records<'t>(text: &'t str) -> impl Iterator<Item = &'t str> + 't {
    let mut parts = LINE_BREAKS.split(text).peekable();
    std::iter::from_fn(move || {
        let part = parts.next()?;
        // A trailing break leaves one empty tail, which is not a record.
        if part.is_empty() && parts.peek().is_none() {
            return None;
        }
        Some(part)
    })
}

/// Classify one record.
pub fn classify_line(line: &str) -> Record {
    let line = line.trim_matches(is_blank);
    if line.is_empty() {
        return Record::Blank;
    }
    let mut tokens = SEPARATORS.split(line);
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Record::Malformed;
    };
    match (x.parse::<i64>(), y.parse::<i64>()) {
        (Ok(x), Ok(y)) => Record::Point(Point::new(x, y)),
        (x, y) => {
            let overflow = |r: &Result<i64, ParseIntError>| match r {
                Ok(_) => true,
                Err(e) => matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ),
            };
            if overflow(&x) && overflow(&y) {
                Record::OutOfRange
            } else {
                Record::Malformed
            }
        }
    }
}

/// Parse one record, or `None` for blank, malformed or out-of-range lines.
pub fn parse_line(line: &str) -> Option<Point> {
    classify_line(line).point()
}

/// Parse an in-memory source, keeping file order.
pub fn parse_points(text: &str) -> Vec<Point> {
    records(text).filter_map(parse_line).collect()
}

/// Parsed points plus what was dropped along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Records {
    pub points: Vec<Point>,
    /// Non-blank records that are not two integers.
    pub skipped: usize,
    /// 1-based record numbers of integer pairs outside the `i64` range.
    pub out_of_range: Vec<usize>,
}

/// Read all records from `reader`. Malformed records are skipped, read errors propagate.
pub fn read_records<R: BufRead>(mut reader: R) -> io::Result<Records> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut out = Records::default();
    for (k, line) in records(&text).enumerate() {
        match classify_line(line) {
            Record::Point(p) => out.points.push(p),
            Record::Malformed => out.skipped += 1,
            Record::OutOfRange => out.out_of_range.push(k + 1),
            Record::Blank => {}
        }
    }
    Ok(out)
}

/// `read_records` without the drop counts.
pub fn read_points<R: BufRead>(reader: R) -> io::Result<Vec<Point>> {
    read_records(reader).map(|r| r.points)
}

/// Write one `"<x> <y>"` line per hull vertex, in hull order.
pub fn write_hull<W: Write>(mut w: W, hull: &Hull) -> io::Result<()> {
    for v in hull.vertices() {
        writeln!(w, "{v}")?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::convex_hull;

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "1,2\n\nabc def\n3 4 5\n";
        assert_eq!(
            parse_points(text),
            vec![Point::new(1, 2), Point::new(3, 4)]
        );
    }

    #[test]
    fn separator_runs_and_signs() {
        assert_eq!(parse_line("  -7 ,\t 12  "), Some(Point::new(-7, 12)));
        assert_eq!(parse_line("+3,,,-4,junk"), Some(Point::new(3, -4)));
        assert_eq!(parse_line("5"), None);
        assert_eq!(parse_line("5,"), None);
        assert_eq!(parse_line(",1,2"), None);
        assert_eq!(parse_line("1.5 2"), None);
        assert_eq!(parse_line("1 two"), None);
        assert_eq!(parse_line("1\x1f2"), Some(Point::new(1, 2)));
        assert_eq!(parse_line("\x1c 8 9 \x1d"), Some(Point::new(8, 9)));
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn reader_keeps_file_order_and_crlf() {
        let src = io::Cursor::new("9 9\r\n0,0\r\nx\r\n4 1\r\n");
        let pts = read_points(src).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(9, 9), Point::new(0, 0), Point::new(4, 1)]
        );
    }

    #[test]
    fn lone_carriage_returns_end_records() {
        let pts = read_points(io::Cursor::new("1 2\r3 4\r")).unwrap();
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(3, 4)]);
        // Mixed endings, and a blank record between two breaks.
        assert_eq!(
            parse_points("1 2\r\n3 4\r\r5 6\n7 8"),
            vec![
                Point::new(1, 2),
                Point::new(3, 4),
                Point::new(5, 6),
                Point::new(7, 8)
            ]
        );
    }

    #[test]
    fn out_of_range_integers_are_reported_not_skipped() {
        assert_eq!(classify_line("99999999999999999999 5"), Record::OutOfRange);
        assert_eq!(classify_line("5 -99999999999999999999"), Record::OutOfRange);
        assert_eq!(classify_line("99999999999999999999 x"), Record::Malformed);
        assert_eq!(
            classify_line("9223372036854775807 -9223372036854775808"),
            Record::Point(Point::new(i64::MAX, i64::MIN))
        );
        let src = io::Cursor::new("0 0\n10 0\n0 10\n99999999999999999999 5\nnope\n");
        let rec = read_records(src).unwrap();
        assert_eq!(rec.points.len(), 3);
        assert_eq!(rec.out_of_range, vec![4]);
        assert_eq!(rec.skipped, 1);
    }

    #[test]
    fn skipped_lines_exclude_blanks() {
        let src = io::Cursor::new("1,2\n\n   \nabc def\n3 4 5\n7\n");
        let rec = read_records(src).unwrap();
        assert_eq!(rec.points.len(), 2);
        assert_eq!(rec.skipped, 2);
    }

    #[test]
    fn reader_surfaces_invalid_utf8() {
        let src = io::Cursor::new(vec![b'1', b' ', b'2', b'\n', 0xff, 0xfe, b'\n']);
        let err = read_points(src).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn hull_dump_format() {
        let hull = convex_hull(&parse_points("0 0\n4 0\n4 4\n0 4\n2 2\n"));
        let mut buf = Vec::new();
        write_hull(&mut buf, &hull).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 0\n4 0\n4 4\n0 4\n");

        let mut empty = Vec::new();
        write_hull(&mut empty, &convex_hull(&[])).unwrap();
        assert!(empty.is_empty());
    }
}
