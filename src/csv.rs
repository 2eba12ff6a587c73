// src/csv.rs
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// CSV/TSV parser: quoted fields, doubled quotes, CRLF and blank lines.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.trim_start_matches('\u{FEFF}').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_row(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a newline (or with unterminated quotes).
    row.push(field);
    push_row(&mut rows, row);
    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.iter().all(|c| c.trim().is_empty());
    if !blank {
        rows.push(row);
    }
}

/// Column positions looked up by (case-insensitive) header name.
#[derive(Clone, Debug)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new(cells: &[String]) -> Self {
        Self { names: cells.iter().map(|c| c.trim().to_ascii_lowercase()).collect() }
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Index of the first column called any of `aliases`.
    pub fn position(&self, aliases: &[&str]) -> Option<usize> {
        self.names.iter().position(|n| aliases.iter().any(|a| n == a))
    }
}

/// First row is the header; the rest are data.
pub fn split_header(mut rows: Vec<Vec<String>>) -> Option<(Header, Vec<Vec<String>>)> {
    if rows.is_empty() { return None; }
    let header = Header::new(&rows.remove(0));
    Some((header, rows))
}

/* ---------------- Writing ---------------- */

/// One cell, quoted only when the separator, a quote or a line break would
/// otherwise change how it reads back.
fn escape(cell: &str, sep: char) -> std::borrow::Cow<'_, str> {
    let special = |c: char| c == sep || c == '"' || c == '\n' || c == '\r';
    if cell.contains(special) {
        format!("\"{}\"", cell.replace('"', "\"\"")).into()
    } else {
        cell.into()
    }
}

pub fn rows_to_string<S: AsRef<str>>(rows: &[Vec<S>], sep: char) -> String {
    let mut out = String::new();
    for row in rows {
        let cells: Vec<_> = row.iter().map(|c| escape(c.as_ref(), sep)).collect();
        out.push_str(&cells.join(&sep.to_string()));
        out.push('\n');
    }
    out
}
