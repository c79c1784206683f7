// Folding samples into per-owner running totals

use std::collections::BTreeMap;

use crate::models::{AggregatedOwner, ChildRecord, DispatchItem, OwnerId, RawSample};

/// Total dispatched work units across all categories.
pub fn dispatch_count(items: &[DispatchItem]) -> u64 {
    items
        .iter()
        .map(|i| i.count)
        .fold(0u64, u64::saturating_add)
}

/// Frames and workers are listed as children; a top-level document only
/// counts toward the totals. Workers are listed even when flagged top-level.
pub fn is_child(sample: &RawSample) -> bool {
    !sample.is_top_level || sample.is_worker
}

/// Adds one sample to `owner_id`'s totals, creating the owner from this
/// sample's `window_id` and host if it is the first one seen.
pub fn fold(
    owners: &mut BTreeMap<OwnerId, AggregatedOwner>,
    owner_id: OwnerId,
    sample: &RawSample,
    window_id: u64,
    dispatch_count: u64,
    memory: u64,
) {
    let owner = owners.entry(owner_id).or_insert_with(|| AggregatedOwner {
        window_id,
        host: sample.host.clone(),
        dispatch_count: 0,
        duration: 0.0,
        memory: 0,
        children: Vec::new(),
    });

    owner.dispatch_count = owner.dispatch_count.saturating_add(dispatch_count);
    owner.duration += sample.duration;
    owner.memory = owner.memory.saturating_add(memory);

    if is_child(sample) {
        owner.children.push(ChildRecord {
            host: sample.host.clone(),
            is_worker: sample.is_worker,
            dispatch_count,
            duration: sample.duration,
            memory,
            counter_id: format!("{}:{}", sample.pid, sample.counter_id),
        });
    }
}
