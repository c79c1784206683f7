// Collaborators the collector depends on: sample source, extension registry, clock

use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;

use crate::models::{Extension, RawSample};

/// Produces the current list of raw samples. May be slow; errors propagate.
pub trait SampleSource {
    fn fetch(&self) -> impl Future<Output = anyhow::Result<Vec<RawSample>>> + Send;
}

/// Lists the active extensions.
pub trait ExtensionRegistry {
    fn active_extensions(&self) -> anyhow::Result<Vec<Extension>>;
}

/// Monotonically non-decreasing timestamp, in milliseconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Reads a JSON array of samples from disk on every fetch, so an external
/// dumper can keep overwriting the file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SampleSource for JsonFileSource {
    async fn fetch(&self) -> anyhow::Result<Vec<RawSample>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| anyhow::anyhow!("read {}: {}", self.path.display(), e))?;
        let samples: Vec<RawSample> = serde_json::from_slice(&bytes)
            .map_err(|e| anyhow::anyhow!("parse {}: {}", self.path.display(), e))?;
        Ok(samples)
    }
}

/// Fixed extension list, typically from config.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    extensions: Vec<Extension>,
}

impl StaticRegistry {
    pub fn new(extensions: Vec<Extension>) -> Self {
        Self { extensions }
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }
}

impl ExtensionRegistry for StaticRegistry {
    fn active_extensions(&self) -> anyhow::Result<Vec<Extension>> {
        Ok(self.extensions.clone())
    }
}

/// Milliseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
