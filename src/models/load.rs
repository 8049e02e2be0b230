// Load average triple (1, 5, 15 minutes), kept as source text

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadAverage {
    pub one: String,
    pub five: String,
    pub fifteen: String,
}

impl LoadAverage {
    pub fn new(one: impl Into<String>, five: impl Into<String>, fifteen: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            five: five.into(),
            fifteen: fifteen.into(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.one, &self.five, &self.fifteen)
    }

    /// Numeric view of the triple.
    pub fn values(&self) -> Result<[f64; 3], ParseError> {
        let parse = |field: &str, value: &str| {
            value.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                field: field.to_string(),
                value: value.to_string(),
            })
        };
        Ok([
            parse("load1", &self.one)?,
            parse("load5", &self.five)?,
            parse("load15", &self.fifteen)?,
        ])
    }
}
