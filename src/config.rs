use serde::Deserialize;

use crate::models::Extension;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
    /// Extensions whose private hostnames group samples by extension instead of window.
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// JSON array of raw performance samples, re-read on every snapshot.
    pub samples_path: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.source.samples_path.is_empty(),
            "source.samples_path must be non-empty"
        );
        for (i, ext) in self.extensions.iter().enumerate() {
            anyhow::ensure!(
                !ext.hostname.is_empty(),
                "extensions[{}].hostname must be non-empty",
                i
            );
            anyhow::ensure!(!ext.id.is_empty(), "extensions[{}].id must be non-empty", i);
        }
        Ok(())
    }
}
