// Per-owner aggregated snapshot

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Grouping key for aggregated samples. Window ids and extension ids live in
/// separate variants so a numeric-looking extension id can never merge with a tab.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OwnerId {
    Window(u64),
    Extension(String),
}

const WINDOW_PREFIX: &str = "window:";
const EXTENSION_PREFIX: &str = "extension:";

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerId::Window(id) => write!(f, "{WINDOW_PREFIX}{id}"),
            OwnerId::Extension(id) => write!(f, "{EXTENSION_PREFIX}{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid owner id {0:?}: expected \"window:<u64>\" or \"extension:<id>\"")]
pub struct ParseOwnerIdError(String);

impl FromStr for OwnerId {
    type Err = ParseOwnerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix(WINDOW_PREFIX) {
            return rest
                .parse()
                .map(OwnerId::Window)
                .map_err(|_| ParseOwnerIdError(s.to_string()));
        }
        match s.strip_prefix(EXTENSION_PREFIX) {
            Some(rest) if !rest.is_empty() => Ok(OwnerId::Extension(rest.to_string())),
            _ => Err(ParseOwnerIdError(s.to_string())),
        }
    }
}

impl Serialize for OwnerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OwnerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Running totals for one owner (tab, browser UI group or extension).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedOwner {
    /// Window id of the first sample folded into this owner.
    pub window_id: u64,
    /// Host of the first sample folded into this owner.
    pub host: String,
    pub dispatch_count: u64,
    pub duration: f64,
    pub memory: u64,
    pub children: Vec<ChildRecord>,
}

/// A frame or worker belonging to an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRecord {
    pub host: String,
    pub is_worker: bool,
    pub dispatch_count: u64,
    pub duration: f64,
    pub memory: u64,
    /// `"<pid>:<counterId>"`, stable across snapshots for the same context.
    pub counter_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub owners: BTreeMap<OwnerId, AggregatedOwner>,
    /// Monotonic capture time in milliseconds.
    pub date: f64,
}

impl Snapshot {
    pub fn owner(&self, id: &OwnerId) -> Option<&AggregatedOwner> {
        self.owners.get(id)
    }

    pub fn total_dispatch_count(&self) -> u64 {
        self.owners
            .values()
            .map(|o| o.dispatch_count)
            .fold(0u64, u64::saturating_add)
    }

    pub fn total_duration(&self) -> f64 {
        self.owners.values().map(|o| o.duration).sum()
    }

    /// Saturates like the per-owner totals it adds up.
    pub fn total_memory(&self) -> u64 {
        self.owners
            .values()
            .map(|o| o.memory)
            .fold(0u64, u64::saturating_add)
    }
}

/// Snapshot plus the local wall-clock time it was captured at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampedSnapshot {
    pub tabs: Snapshot,
    pub timestamp: String,
}
