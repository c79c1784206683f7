// Snapshot collection: await the sample source, index extensions, aggregate.

use tracing::{debug, warn};

use crate::aggregation::{ExtensionHostIndex, build_snapshot};
use crate::error::CollectError;
use crate::models::{Snapshot, TimestampedSnapshot};
use crate::source::{
    Clock, ExtensionRegistry, JsonFileSource, MonotonicClock, SampleSource, StaticRegistry,
};

/// Local wall-clock format recorded next to each snapshot.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Collector wired to the file source, config registry and process clock.
pub type FileCollector = SnapshotCollector<JsonFileSource, StaticRegistry, MonotonicClock>;

pub struct SnapshotCollector<S, R, C> {
    source: S,
    registry: R,
    clock: C,
}

impl<S, R, C> SnapshotCollector<S, R, C>
where
    S: SampleSource,
    R: ExtensionRegistry,
    C: Clock,
{
    pub fn new(source: S, registry: R, clock: C) -> Self {
        Self {
            source,
            registry,
            clock,
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Fetches samples and extensions once, then folds them synchronously.
    /// Collaborator failures are returned as-is; nothing is retried.
    pub async fn collect(&self) -> Result<Snapshot, CollectError> {
        let samples = self.source.fetch().await.map_err(|e| {
            warn!(error = %e, operation = "fetch_samples", "sample source failed");
            CollectError::Source(e)
        })?;
        let extensions = self.registry.active_extensions().map_err(|e| {
            warn!(error = %e, operation = "active_extensions", "extension registry failed");
            CollectError::Registry(e)
        })?;
        let index = ExtensionHostIndex::from_extensions(extensions);

        let snapshot = build_snapshot(&samples, &index, self.clock.now());
        debug!(
            operation = "collect_snapshot",
            samples_count = samples.len(),
            extensions_count = index.len(),
            owners_count = snapshot.owners.len(),
            "Snapshot collected"
        );
        Ok(snapshot)
    }

    pub async fn collect_timestamped(&self) -> Result<TimestampedSnapshot, CollectError> {
        let tabs = self.collect().await?;
        Ok(TimestampedSnapshot {
            tabs,
            timestamp: chrono::Local::now().format(TIMESTAMP_FMT).to_string(),
        })
    }
}
