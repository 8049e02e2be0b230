// Load average triple: decimal tokens, or SunOS fixed-point kstat values

use crate::error::ParseError;
use crate::models::LoadAverage;
use crate::platform::LoadFormat;

use super::parse_key_values;

pub fn parse_load_average(text: &str, format: &LoadFormat) -> Result<LoadAverage, ParseError> {
    match format {
        LoadFormat::Decimal => parse_decimal(text),
        LoadFormat::Scaled { labels, scale } => parse_scaled(text, labels, *scale),
    }
}

/// Fixed-point load figure as text with two decimals: `scale_load(256, 256) == "1.00"`.
pub fn scale_load(raw: u64, scale: u32) -> String {
    format!("{:.2}", raw as f64 / f64::from(scale))
}

fn parse_decimal(text: &str) -> Result<LoadAverage, ParseError> {
    let mut figures = text
        .split_whitespace()
        .filter(|t| t.contains('.') && t.parse::<f64>().is_ok());
    match (figures.next(), figures.next(), figures.next()) {
        (Some(one), Some(five), Some(fifteen)) => Ok(LoadAverage::new(one, five, fifteen)),
        _ => Err(ParseError::Tokenize {
            what: "load average",
        }),
    }
}

fn parse_scaled(text: &str, labels: &[&str; 3], scale: u32) -> Result<LoadAverage, ParseError> {
    if scale == 0 {
        return Err(ParseError::InvalidInput("load scale factor is zero".to_string()));
    }
    let values = parse_key_values(text, labels);
    let [one, five, fifteen] = [labels[0], labels[1], labels[2]]
        .map(|label| values.require_u64(label).map(|raw| scale_load(raw, scale)));
    Ok(LoadAverage::new(one?, five?, fifteen?))
}
