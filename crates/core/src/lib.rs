//! Core codecs for the Emergency Kit recovery document.
//!
//! Decodes encrypted key shares, derives checksummed output
//! descriptors and assembles the versioned metadata record that
//! is embedded in the kit.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod descriptor;
pub mod encrypted_key;
mod error;
pub mod metadata;

pub use descriptor::{build_descriptors, DescriptorSet};
pub use encrypted_key::EncryptedKeyRecord;
pub use error::{Error, ErrorKind};
pub use metadata::{
    MetadataKeyEntry, MetadataPublicKeyEntry, MetadataRecord, PublicKeyTag,
    METADATA_VERSION,
};

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
