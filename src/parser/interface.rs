// Interface counters: /proc/net/dev, netstat -i -b -n, dladm show-link -s

use super::data_lines;
use crate::error::ParseError;
use crate::models::{Counters, InterfaceCounters, InterfaceTable};
use crate::platform::{CounterColumns, InterfaceFormat, InterfaceKey, Offset};

/// Suffix used when the address token is numeric, i.e. the address column
/// was blank and a counter shifted into its place.
pub const NO_ADDRESS: &str = "none";

pub fn parse_interfaces(text: &str, format: &InterfaceFormat) -> Result<InterfaceTable, ParseError> {
    let needed = format.min_tokens();
    let mut table = InterfaceTable::new();

    for (row, line) in data_lines(text, format.header_lines)? {
        let tokens = tokenize(line, format);
        if tokens.len() < needed {
            return Err(ParseError::MalformedRow {
                row,
                line: line.to_string(),
                expected: needed,
                found: tokens.len(),
            });
        }

        let key = match format.key {
            InterfaceKey::Colon | InterfaceKey::Name => tokens[0].to_string(),
            InterfaceKey::NameWithSuffix { index } => {
                format!("{}/{}", tokens[0], address_suffix(tokens[index]))
            }
        };
        let counters = InterfaceCounters {
            inbound: counters(&tokens, &format.inbound, "inbound")?,
            outbound: counters(&tokens, &format.outbound, "outbound")?,
        };
        table.insert(key, counters);
    }

    Ok(table)
}

/// Split a row into the key token and counters, reading placeholders as zero.
fn tokenize<'a>(line: &'a str, format: &InterfaceFormat) -> Vec<&'a str> {
    let mut tokens: Vec<&str> = match format.key {
        InterfaceKey::Colon => match line.split_once(':') {
            Some((name, rest)) => std::iter::once(name.trim())
                .chain(rest.split_whitespace())
                .collect(),
            None => line.split_whitespace().collect(),
        },
        _ => line.split_whitespace().collect(),
    };
    if let Some(placeholder) = format.placeholder {
        for token in tokens.iter_mut().skip(1) {
            if *token == placeholder {
                *token = "0";
            }
        }
    }
    tokens
}

fn address_suffix(token: &str) -> &str {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        NO_ADDRESS
    } else {
        token
    }
}

fn counters(
    tokens: &[&str],
    columns: &CounterColumns,
    direction: &str,
) -> Result<Counters, ParseError> {
    let value = |offset: Offset, name: &str| -> Result<u64, ParseError> {
        let token = tokens[offset.index(tokens.len())];
        token.parse().map_err(|_| ParseError::InvalidNumber {
            field: format!("{direction}.{name}"),
            value: token.to_string(),
        })
    };
    Ok(Counters {
        bytes: value(columns.bytes, "bytes")?,
        packets: value(columns.packets, "packets")?,
        errors: value(columns.errors, "errors")?,
        dropped: columns
            .dropped
            .map(|offset| value(offset, "dropped"))
            .transpose()?,
    })
}
