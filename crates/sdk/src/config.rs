//! Kit configuration.
use crate::{Error, Result};
use ek_document::AttachmentOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for generating and embedding kits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Languages the content renderer supports.
    ///
    /// When empty any language is passed to the renderer.
    pub languages: Vec<String>,

    /// Metadata attachment in the document.
    pub attachment: AttachmentOptions,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string(), "es".to_string()],
            attachment: Default::default(),
        }
    }
}

impl KitConfig {
    /// Load a config from a TOML file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !tokio::fs::try_exists(path.as_ref()).await? {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        let config: KitConfig = toml::from_str(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            languages = ?config.languages,
            "config::load"
        );
        Ok(config)
    }

    /// Determine if a language is supported.
    pub fn supports_language(&self, language: &str) -> bool {
        self.languages.is_empty()
            || self.languages.iter().any(|l| l == language)
    }
}
