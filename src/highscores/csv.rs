//! CSV interchange format
//!
//! ```text
//! name,score,date
//! Alice,1500,2024-01-01
//! ```
//!
//! The first line is always treated as a header and skipped on import.

use super::HighscoreEntry;
use crate::error::{Error, Result};
use crate::settings::{CsvDialect, ImportPolicy};

/// Header line written on export
pub const CSV_HEADER: &str = "name,score,date";

/// Rows need at least this many fields; extra fields are ignored
const MIN_FIELDS: usize = 3;

/// Render entries in the given dialect, one newline-terminated record each
pub fn write_csv(entries: &[HighscoreEntry], dialect: CsvDialect) -> Result<String> {
    match dialect {
        CsvDialect::Plain => Ok(write_plain(entries)),
        CsvDialect::Quoted => write_quoted(entries),
    }
}

fn write_plain(entries: &[HighscoreEntry]) -> String {
    let mut out = String::with_capacity(16 + entries.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        out.push_str(&entry.name);
        out.push(',');
        out.push_str(&entry.score_label());
        out.push(',');
        out.push_str(&entry.date);
        out.push('\n');
    }

    out
}

fn write_quoted(entries: &[HighscoreEntry]) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .quote_style(::csv::QuoteStyle::Necessary)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER.split(','))?;
    for entry in entries {
        writer.write_record([
            entry.name.as_str(),
            entry.score_label().as_str(),
            entry.date.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Parse every data row of `content` into entries
pub fn parse_csv(content: &str, dialect: CsvDialect, policy: ImportPolicy) -> Vec<HighscoreEntry> {
    match dialect {
        CsvDialect::Plain => content
            .split('\n')
            .skip(1)
            .filter_map(|line| {
                let fields = line.trim().split(',').map(str::to_string).collect();
                row_to_entry(fields, policy)
            })
            .collect(),
        CsvDialect::Quoted => parse_quoted(content, policy),
    }
}

fn parse_quoted(content: &str, policy: ImportPolicy) -> Vec<HighscoreEntry> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping unreadable CSV row: {}", e);
                continue;
            }
        };

        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if fields.len() < MIN_FIELDS && fields.iter().any(|f| f.contains('\n')) {
            // An open quote runs to the end of the input
            let line = record.position().map_or(0, |p| p.line());
            log::warn!("Unterminated quote at CSV line {}, rest of input skipped", line);
        }
        rows.extend(row_to_entry(fields, policy));
    }

    rows
}

fn row_to_entry(fields: Vec<String>, policy: ImportPolicy) -> Option<HighscoreEntry> {
    if fields.len() == 1 && fields[0].trim().is_empty() {
        return None;
    }
    if fields.len() < MIN_FIELDS {
        log::debug!("Skipping CSV row with {} fields", fields.len());
        return None;
    }

    let mut fields = fields.into_iter();
    let name = fields.next()?;
    let score = parse_score(&fields.next()?);
    let date = fields.next()?;

    if score.is_none() && policy == ImportPolicy::Strict {
        log::debug!("Skipping CSV row for {:?}: score is not a number", name);
        return None;
    }

    Some(HighscoreEntry { name, score, date })
}

/// Lenient base-10 parse: leading whitespace and a sign are accepted, and
/// parsing stops at the first non-digit. `None` if no digit was read or the
/// value does not fit in an `i64`.
pub fn parse_score(field: &str) -> Option<i64> {
    let s = field.trim_start();
    let sign = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));

    let digits = s[sign..]
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len() - sign);
    if digits == 0 {
        return None;
    }

    s[..sign + digits].parse().ok()
}
