use crate::RenderError;
use ek_core::ErrorKind;
use std::{fmt, path::PathBuf};
use thiserror::Error;

/// Which of the two encrypted key shares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyShare {
    /// First key share.
    First,
    /// Second key share.
    Second,
}

impl fmt::Display for KeyShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Stage of an operation that produced an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Loading configuration.
    Config,
    /// Decoding an encrypted key.
    Decode,
    /// Building descriptors and metadata.
    Build,
    /// Rendering the kit content.
    Render,
    /// Serializing metadata.
    Serialize,
    /// Deserializing metadata.
    Deserialize,
    /// Embedding metadata into a document.
    Embed,
    /// Extracting metadata from a document.
    Extract,
}

/// Errors generated by the SDK.
///
/// Each variant records the stage that failed and keeps
/// the underlying error as its source.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a config file does not exist.
    #[error("config file {0} does not exist")]
    NotFile(PathBuf),

    /// Error generated when a config file cannot be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Error generated when a config file cannot be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated when the kit is requested in a
    /// language that is not configured.
    #[error("unsupported language {0:?}")]
    UnsupportedLanguage(String),

    /// Error generated when an encrypted key cannot be decoded.
    #[error("failed to decode {share} key: {source}")]
    Decode {
        /// Key share that failed to decode.
        share: KeyShare,
        /// Decoder error.
        #[source]
        source: ek_core::Error,
    },

    /// Error generated when the metadata cannot be built.
    #[error("failed to build metadata: {0}")]
    Build(#[source] ek_core::Error),

    /// Error generated by the content renderer.
    #[error("failed to render kit: {0}")]
    Render(#[source] RenderError),

    /// Error generated when the metadata cannot be serialized.
    #[error("failed to serialize metadata: {0}")]
    Serialize(#[source] ek_core::Error),

    /// Error generated when the opaque metadata is invalid.
    #[error("failed to deserialize metadata: {0}")]
    Deserialize(#[source] ek_core::Error),

    /// Error generated when the metadata cannot be embedded.
    #[error("failed to embed metadata: {0}")]
    Embed(#[source] ek_document::Error),

    /// Error generated when the metadata cannot be extracted.
    #[error("failed to extract metadata: {0}")]
    Extract(#[source] ek_document::Error),
}

impl Error {
    /// Stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::NotFile(_) | Self::Config(_) | Self::Io(_) => Stage::Config,
            Self::UnsupportedLanguage(_) | Self::Render(_) => Stage::Render,
            Self::Decode { .. } => Stage::Decode,
            Self::Build(_) => Stage::Build,
            Self::Serialize(_) => Stage::Serialize,
            Self::Deserialize(_) => Stage::Deserialize,
            Self::Embed(_) => Stage::Embed,
            Self::Extract(_) => Stage::Extract,
        }
    }

    /// Category of the underlying failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFile(_) | Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::UnsupportedLanguage(_) | Self::Render(_) => {
                ErrorKind::Render
            }
            Self::Decode { source, .. } => source.kind(),
            Self::Build(e) | Self::Serialize(e) | Self::Deserialize(e) => {
                e.kind()
            }
            Self::Embed(e) | Self::Extract(e) => e.kind(),
        }
    }
}
