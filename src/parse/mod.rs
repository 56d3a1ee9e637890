// src/parse/mod.rs
use tracing::debug;

use crate::table::{ParsedTable, Record};

pub const DEFAULT_DELIMITER: char = ';';
const QUOTE: char = '"';
const BOM: char = '\u{feff}';

/// Whitespace for trimming and token splitting. Includes the byte-order mark,
/// which spreadsheet exports put at the start of the file.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// `text` without one leading byte-order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Split `text` into raw rows of untrimmed fields.
///
/// Quoting is the lenient kind: a `"` anywhere outside quotes switches into
/// quoted mode, `""` inside quotes is a literal quote, and an unterminated
/// quote simply runs to the end of the input. `\r` outside quotes is dropped.
/// A leading byte-order mark is skipped.
pub fn split_rows(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let text = strip_bom(text);
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            QUOTE => in_quotes = true,
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            c if c == delimiter => row.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }

    // no trailing newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Parse delimiter-separated `text` into a header and records.
///
/// Never fails: empty or malformed input degrades to fewer (or no) rows.
/// Fields are trimmed, all-blank rows are skipped, the first remaining row is
/// the header. Short rows are padded with `""`, long rows are cut to the
/// header width.
pub fn parse(text: &str, delimiter: char) -> ParsedTable {
    let mut rows = split_rows(text, delimiter)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|f| f.trim_matches(is_blank).to_string())
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|f| !f.is_empty()));

    let header = match rows.next() {
        Some(h) => h,
        None => {
            debug!("no non-blank rows");
            return ParsedTable::empty();
        }
    };

    let records: Vec<Record> = rows
        .map(|row| {
            let mut rec = Record::with_capacity(header.len());
            for (i, name) in header.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                rec.insert(name.as_str(), value);
            }
            rec
        })
        .collect();

    debug!(columns = header.len(), records = records.len(), "parsed table");
    ParsedTable { header, records }
}

/// [`parse`] with the `;` delimiter.
pub fn parse_default(text: &str) -> ParsedTable {
    parse(text, DEFAULT_DELIMITER)
}
