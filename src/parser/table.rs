// Whitespace tables with header lines and summary rows: df, swap, iostat

use tracing::debug;

use crate::error::ParseError;
use crate::models::{KeyedTable, Row};
use crate::platform::{KeyColumn, TableFormat};

/// Data lines of `text` with their 1-based line numbers: header removed,
/// trailing and interior blank lines skipped.
pub fn data_lines(text: &str, header_lines: usize) -> Result<Vec<(usize, &str)>, ParseError> {
    let mut lines: Vec<(usize, &str)> = text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect();
    while lines.last().is_some_and(|(_, l)| l.trim().is_empty()) {
        lines.pop();
    }

    if lines.len() < header_lines {
        return Err(ParseError::HeaderSkip {
            expected: header_lines,
            found: lines.len(),
        });
    }

    Ok(lines
        .into_iter()
        .skip(header_lines)
        .filter(|(_, l)| !l.trim().is_empty())
        .collect())
}

/// Parse a table into rows keyed by device/mount. Each row must hold one
/// token per field plus the key (more when the last field takes the rest);
/// any other count fails the whole parse.
pub fn parse_table(text: &str, format: &TableFormat) -> Result<KeyedTable, ParseError> {
    let needed = format.fields.len() + 1;
    let mut table = KeyedTable::new();

    for (row, line) in data_lines(text, format.header_lines)? {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let fits = if format.rest_in_last {
            tokens.len() >= needed
        } else {
            tokens.len() == needed
        };
        if !fits {
            return Err(ParseError::MalformedRow {
                row,
                line: line.to_string(),
                expected: needed,
                found: tokens.len(),
            });
        }

        let (key, values) = match format.key {
            KeyColumn::First => (tokens[0], &tokens[1..]),
            KeyColumn::Last => {
                let last = tokens.len() - 1;
                (tokens[last], &tokens[..last])
            }
        };
        if format.summary_key == Some(key) {
            debug!(key, row, "summary row dropped");
            continue;
        }

        let (head, rest) = values.split_at(format.fields.len().saturating_sub(1));
        let fields: Row = format
            .fields
            .iter()
            .zip(head.iter().map(|v| v.to_string()).chain([rest.join(" ")]))
            .map(|(field, value)| (field.to_string(), value))
            .collect();
        if table.insert(key, fields).is_some() {
            debug!(key, row, "duplicate key, later row kept");
        }
    }

    Ok(table)
}
