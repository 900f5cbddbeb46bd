use std::fmt;
use thiserror::Error;

/// Broad category of a failure.
///
/// Lets callers tell bad input data apart from storage failures
/// and unsupported format versions without matching on every
/// variant of every error type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed encrypted key.
    Decode,
    /// Malformed fingerprint, public key or descriptor input.
    Validation,
    /// Malformed opaque metadata.
    Parse,
    /// Metadata version not understood by this codec.
    VersionMismatch,
    /// Document is not a valid container.
    Format,
    /// Document has no embedded metadata.
    NotFound,
    /// Read or write failure.
    Io,
    /// Content rendering failure.
    Render,
    /// Invalid configuration.
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Decode => "decode",
            Self::Validation => "validation",
            Self::Parse => "parse",
            Self::VersionMismatch => "version mismatch",
            Self::Format => "format",
            Self::NotFound => "not found",
            Self::Io => "io",
            Self::Render => "render",
            Self::Config => "config",
        };
        f.write_str(name)
    }
}

/// Errors generated by the core library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when an encrypted key is not valid base58.
    #[error("encrypted key is not valid base58: {0}")]
    KeyEncoding(#[from] bs58::decode::Error),

    /// Error generated when an encrypted key layout version is unknown.
    #[error("unknown encrypted key version {0}")]
    KeyVersion(u8),

    /// Error generated when the encrypted key is empty.
    #[error("encrypted key is empty")]
    KeyEmpty,

    /// Error generated when the encrypted key has the wrong length
    /// for its layout version.
    #[error(
        "encrypted key version {version} expects {expected} bytes but got {actual}"
    )]
    KeyLength {
        /// Layout version.
        version: u8,
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// Error generated when a fingerprint is not 8 hex characters.
    #[error("invalid fingerprint {0:?}, expected 8 hex characters")]
    InvalidFingerprint(String),

    /// Error generated when a public key is not a hex encoded
    /// compressed secp256k1 point.
    #[error("invalid public key {0:?}")]
    InvalidPublicKey(String),

    /// Error generated when a descriptor contains a character
    /// outside the descriptor charset.
    #[error("invalid descriptor character {0:?}")]
    DescriptorCharacter(char),

    /// Error generated when a descriptor checksum is missing
    /// or does not match the descriptor body.
    #[error("descriptor checksum mismatch for {0:?}")]
    DescriptorChecksum(String),

    /// Error generated when the metadata has no integer version field.
    #[error("metadata version field is missing or not an integer")]
    MissingVersion,

    /// Error generated when the metadata version is not supported.
    #[error("unsupported metadata version {found}, expected {expected}")]
    VersionMismatch {
        /// Version found in the metadata.
        found: u64,
        /// Version understood by this codec.
        expected: u32,
    },

    /// Error generated when the metadata carries a public key that
    /// is not a hex encoded compressed secp256k1 point.
    #[error("metadata public key {0:?} is invalid")]
    MetadataPublicKey(String),

    /// Error generated when a metadata field is not valid hex.
    #[error("metadata field {field} is not valid hex: {source}")]
    FieldHex {
        /// Name of the field.
        field: &'static str,
        /// Hex decoder error.
        #[source]
        source: hex::FromHexError,
    },

    /// Error generated when a decoded metadata field has
    /// the wrong length.
    #[error("metadata field {field} expects {expected} bytes but got {actual}")]
    FieldLength {
        /// Name of the field.
        field: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },

    /// Error generated by the JSON library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::KeyEncoding(_)
            | Self::KeyVersion(_)
            | Self::KeyEmpty
            | Self::KeyLength { .. } => ErrorKind::Decode,
            Self::InvalidFingerprint(_)
            | Self::InvalidPublicKey(_)
            | Self::DescriptorCharacter(_) => ErrorKind::Validation,
            Self::VersionMismatch { .. } => ErrorKind::VersionMismatch,
            Self::DescriptorChecksum(_)
            | Self::MissingVersion
            | Self::MetadataPublicKey(_)
            | Self::FieldHex { .. }
            | Self::FieldLength { .. }
            | Self::Json(_) => ErrorKind::Parse,
        }
    }
}
