//! Best-effort parser for plain-text batch results.
//!
//! Each accepted line looks like `id1 id2 score [extra...]`. Lines that do not
//! fit are dropped without any per-line error.

use super::model::BatchRow;

/// Parses whitespace-delimited `id1 id2 score` lines into rows.
///
/// A line is kept only when it has at least three tokens and the third one
/// parses as a finite number. Blank lines and extra tokens are ignored.
pub fn parse_batch_text(text: &str) -> Vec<BatchRow> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<BatchRow> {
    let mut tokens = line.split_whitespace();
    let id1 = tokens.next()?;
    let id2 = tokens.next()?;
    let score = tokens.next()?.parse::<f64>().ok().filter(|s| s.is_finite())?;

    Some(BatchRow {
        id1: id1.to_string(),
        id2: id2.to_string(),
        score,
    })
}
