// Errors surfaced by snapshot collection

/// Which collaborator failed while collecting a snapshot. Aggregation itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("sample source: {0:#}")]
    Source(anyhow::Error),
    #[error("extension registry: {0:#}")]
    Registry(anyhow::Error),
}
