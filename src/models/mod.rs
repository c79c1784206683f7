// Domain models: raw performance samples in, per-owner snapshots out

mod extension;
mod sample;
mod snapshot;

pub use extension::Extension;
pub use sample::{DispatchItem, MediaMemoryInfo, MemoryInfo, RawSample};
pub use snapshot::{
    AggregatedOwner, ChildRecord, OwnerId, ParseOwnerIdError, Snapshot, TimestampedSnapshot,
};
