// Snapshot aggregation: group raw samples by owner and total them.
// Pure and synchronous; fetching samples and extensions happens in the collector.

pub mod memory;
pub mod owner;
pub mod tab;

use std::collections::{BTreeMap, HashMap};

use crate::models::{Extension, RawSample, Snapshot};

pub use memory::compute_memory;
pub use owner::{BROWSER_UI_WINDOW_ID, NO_WINDOW_SENTINEL, effective_window_id, resolve_owner};
pub use tab::{dispatch_count, fold};

/// Lookup from an extension's private hostname to its id.
#[derive(Debug, Clone, Default)]
pub struct ExtensionHostIndex {
    by_host: HashMap<String, String>,
}

impl ExtensionHostIndex {
    /// Later entries with the same hostname replace earlier ones.
    pub fn from_extensions<I>(extensions: I) -> Self
    where
        I: IntoIterator<Item = Extension>,
    {
        let by_host = extensions
            .into_iter()
            .map(|e| (e.hostname, e.id))
            .collect();
        Self { by_host }
    }

    pub fn get(&self, host: &str) -> Option<&str> {
        self.by_host.get(host).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_host.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_host.is_empty()
    }
}

/// Folds every sample, in order, into its owner. `now` is stored as the snapshot date.
pub fn build_snapshot(samples: &[RawSample], index: &ExtensionHostIndex, now: f64) -> Snapshot {
    let mut owners = BTreeMap::new();
    for sample in samples {
        let owner_id = resolve_owner(sample, index);
        let window_id = effective_window_id(sample);
        let count = dispatch_count(&sample.items);
        let memory = compute_memory(sample.memory_info.as_ref());
        fold(&mut owners, owner_id, sample, window_id, count, memory);
    }
    Snapshot { owners, date: now }
}
