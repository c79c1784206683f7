// Raw per-context performance sample, as returned by the browser's metrics API

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// One performance measurement for a single document, frame or worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSampleWire")]
pub struct RawSample {
    pub host: String,
    /// Owning window. Workers may report 0 or `u64::MAX` when they have no window.
    pub window_id: u64,
    pub pid: u32,
    pub counter_id: u64,
    pub items: Vec<DispatchItem>,
    pub duration: f64,
    pub is_worker: bool,
    pub is_top_level: bool,
    pub memory_info: Option<MemoryInfo>,
}

/// Decoding shape of `RawSample`. The process id may arrive as `pid`,
/// `processId` or both; `pid` wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSampleWire {
    host: String,
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    window_id: u64,
    #[serde(default)]
    pid: Option<u32>,
    #[serde(default)]
    process_id: Option<u32>,
    counter_id: u64,
    #[serde(default)]
    items: Vec<DispatchItem>,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    is_worker: bool,
    #[serde(default)]
    is_top_level: bool,
    #[serde(default)]
    memory_info: Option<MemoryInfo>,
}

impl From<RawSampleWire> for RawSample {
    fn from(w: RawSampleWire) -> Self {
        Self {
            host: w.host,
            window_id: w.window_id,
            pid: w.pid.or(w.process_id).unwrap_or(0),
            counter_id: w.counter_id,
            items: w.items,
            duration: w.duration,
            is_worker: w.is_worker,
            is_top_level: w.is_top_level,
            memory_info: w.memory_info,
        }
    }
}

/// Dispatched work units for one task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchItem {
    #[serde(default)]
    pub category: u32,
    #[serde(deserialize_with = "deserialize_saturating_u64")]
    pub count: u64,
}

/// Memory breakdown of one context, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    pub dom_dom: u64,
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    pub dom_style: u64,
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    pub dom_other: u64,
    #[serde(
        default,
        rename = "GCHeapUsage",
        deserialize_with = "deserialize_saturating_u64"
    )]
    pub gc_heap_usage: u64,
    #[serde(default)]
    pub media: MediaMemoryInfo,
    /// Scalar fields not listed above (e.g. `jsMemory`); they still count toward the total.
    #[serde(flatten, deserialize_with = "deserialize_byte_counts")]
    pub other: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMemoryInfo {
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    pub audio_size: u64,
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    pub video_size: u64,
    #[serde(default, deserialize_with = "deserialize_saturating_u64")]
    pub resources_size: u64,
}

/// Counters arrive as JSON numbers produced from doubles upstream, so a byte
/// count may be written as `1.0` and `u64::MAX` shows up as
/// `18446744073709552000`, which does not fit a u64. Floats saturate into
/// range, negatives clamp to 0, null maps to 0.
fn deserialize_saturating_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SaturatingU64Visitor)
}

struct SaturatingU64Visitor;

impl Visitor<'_> for SaturatingU64Visitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer or float")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(u64::try_from(v).unwrap_or(0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        // `as` saturates: >= 2^64 becomes u64::MAX, negatives and NaN become 0.
        Ok(v as u64)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }
}

struct ByteCount(u64);

impl<'de> Deserialize<'de> for ByteCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_saturating_u64(deserializer).map(ByteCount)
    }
}

fn deserialize_byte_counts<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let counts = BTreeMap::<String, ByteCount>::deserialize(deserializer)?;
    Ok(counts.into_iter().map(|(k, v)| (k, v.0)).collect())
}
