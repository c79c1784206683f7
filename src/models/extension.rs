// Active extension as reported by the extension registry

use serde::{Deserialize, Serialize};

/// One installed, enabled extension. `hostname` is the private per-extension
/// host its background pages and workers report as their `host`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub hostname: String,
    pub id: String,
}

impl Extension {
    pub fn new(hostname: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            id: id.into(),
        }
    }
}
