use anyhow::Result;
use std::fmt::Write;

use crate::reference::{self, Section};
use crate::table::Record;

/// Most rows shown at once. The filter itself never truncates.
pub const DEFAULT_DISPLAY_LIMIT: usize = 1000;

/// First `limit` records.
pub fn cap(records: &[Record], limit: usize) -> &[Record] {
    &records[..records.len().min(limit)]
}

/// Fixed-width text table with a header line.
pub fn render_text(header: &[String], records: &[Record]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for rec in records {
        for (i, name) in header.iter().enumerate() {
            let len = rec.get(name).map(|v| v.chars().count()).unwrap_or(0);
            widths[i] = widths[i].max(len);
        }
    }

    let mut out = String::new();
    push_line(&mut out, header.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for rec in records {
        push_line(
            &mut out,
            header.iter().map(|h| rec.get(h).unwrap_or("")),
            &widths,
        );
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One JSON object per line.
pub fn json_lines(records: &[Record]) -> Result<String> {
    let mut out = String::new();
    for rec in records {
        out.push_str(&serde_json::to_string(rec)?);
        out.push('\n');
    }
    Ok(out)
}

/// Sidebar-style listing of the guide's sections.
pub fn render_toc() -> String {
    let mut out = String::from("SUMÁRIO\n");
    for (id, title) in reference::table_of_contents() {
        let _ = writeln!(out, "  #{:<18} {}", id, title);
    }
    out
}

/// A section with its description, notes, tables and footer.
pub fn render_section(section: &Section) -> String {
    let header: Vec<String> = reference::COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", section.title);
    if let Some(desc) = section.description {
        let _ = writeln!(out, "{}", desc);
    }
    for note in section.notes {
        let _ = writeln!(out, "  - {}", note);
    }
    for (i, t) in section.tables.iter().enumerate() {
        out.push('\n');
        if let Some(sub) = t.subtitle {
            let _ = writeln!(out, "{}", sub);
        }
        if let Some(caption) = t.caption {
            let _ = writeln!(out, "({})", caption);
        }
        let records: Vec<Record> = t.rows.iter().map(|r| r.to_record()).collect();
        out.push_str(&render_text(&header, &records));
        if i + 1 == section.tables.len() {
            if let Some(footer) = section.footer {
                let _ = writeln!(out, "{}", footer);
            }
        }
    }
    out
}

pub fn footer(year: i32) -> String {
    format!("© {} — {}", year, reference::TITLE)
}
