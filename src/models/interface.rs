// Network interface counters

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One direction of traffic. `dropped` is `None` where the platform tool
/// does not report drops for that direction (FreeBSD outbound, SunOS both).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    pub bytes: u64,
    pub packets: u64,
    pub errors: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropped: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceCounters {
    pub inbound: Counters,
    pub outbound: Counters,
}

/// Counters keyed by interface. On FreeBSD the key is `name/suffix`, one
/// entry per address family row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceTable {
    interfaces: BTreeMap<String, InterfaceCounters>,
}

impl InterfaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, counters: InterfaceCounters) {
        self.interfaces.insert(key.into(), counters);
    }

    pub fn get(&self, key: &str) -> Option<&InterfaceCounters> {
        self.interfaces.get(key)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.interfaces.keys().map(String::as_str)
    }
}
