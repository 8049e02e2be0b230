// One point-in-time capture of several metrics

use std::collections::BTreeMap;

use serde::Serialize;

use super::{FieldValues, InterfaceTable, KeyedTable, LoadAverage, UptimeRecord};
use crate::platform::{Metric, Platform};

/// Metrics that failed are absent and their error text is kept in `errors`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    pub platform: Platform,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<UptimeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<FieldValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<KeyedTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_average: Option<LoadAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_usage: Option<KeyedTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inodes: Option<KeyedTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io_stats: Option<KeyedTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<InterfaceTable>,
    pub errors: BTreeMap<Metric, String>,
}

impl HostSnapshot {
    pub fn empty(platform: Platform, timestamp: i64, page_size: Option<u64>) -> Self {
        Self {
            platform,
            timestamp,
            page_size,
            uptime: None,
            memory: None,
            swap: None,
            load_average: None,
            fs_usage: None,
            inodes: None,
            io_stats: None,
            interfaces: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
