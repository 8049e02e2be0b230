// Label/value lines: "MemTotal:  16384 kB", "vm.stats.vm.v_page_count: 2031234", "unix:0:system_pages:physmem\t123"

use crate::models::FieldValues;

/// Collect the value (second token) of every line whose label (first token,
/// trailing colon removed) equals one of `fields`. Labels that never occur
/// are absent from the result.
pub fn parse_key_values(text: &str, fields: &[&str]) -> FieldValues {
    let mut values = FieldValues::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(label), Some(value)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let label = label.strip_suffix(':').unwrap_or(label);
        if let Some(field) = fields.iter().find(|f| **f == label) {
            values.insert(*field, value);
        }
    }
    values
}
