//! Versioned metadata embedded in an Emergency Kit.
use crate::{descriptor::DescriptorSet, encrypted_key::EncryptedKeyRecord};
use serde::{Deserialize, Serialize};

mod builder;
mod codec;

pub use builder::validate_public_key;

/// Current revision of the metadata format.
pub const METADATA_VERSION: u32 = 3;

/// Hex projection of an encrypted key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetadataKeyEntry {
    /// Ephemeral public key.
    pub dh_pub_key: String,
    /// Encrypted private key.
    pub encrypted_priv_key: String,
    /// Recovery code salt.
    pub salt: String,
}

impl From<&EncryptedKeyRecord> for MetadataKeyEntry {
    fn from(value: &EncryptedKeyRecord) -> Self {
        Self {
            dh_pub_key: hex::encode(value.ephemeral_public_key()),
            encrypted_priv_key: hex::encode(value.cipher_text()),
            salt: hex::encode(value.salt()),
        }
    }
}

/// Role of an auxiliary public key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicKeyTag {
    /// Co-signing key of the swap server.
    SwapServer,
}

/// Auxiliary public key included as recovery material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetadataPublicKeyEntry {
    /// Role of the key.
    pub tag: PublicKeyTag,
    /// Hex encoded compressed public key.
    pub public_key: String,
}

/// Metadata record for an Emergency Kit.
///
/// Assembled once per kit with [MetadataRecord::assemble] and
/// never modified afterwards; the fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetadataRecord {
    version: u32,
    birthday_block: u32,
    encrypted_keys: [MetadataKeyEntry; 2],
    public_keys: Vec<MetadataPublicKeyEntry>,
    output_descriptors: DescriptorSet,
}

impl MetadataRecord {
    /// Format revision.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Birthday of the second key.
    pub fn birthday_block(&self) -> u32 {
        self.birthday_block
    }

    /// Encrypted keys in (first, second) order.
    pub fn encrypted_keys(&self) -> &[MetadataKeyEntry; 2] {
        &self.encrypted_keys
    }

    /// Auxiliary public keys.
    pub fn public_keys(&self) -> &[MetadataPublicKeyEntry] {
        &self.public_keys
    }

    /// Find an auxiliary public key by tag.
    pub fn public_key(&self, tag: PublicKeyTag) -> Option<&str> {
        self.public_keys
            .iter()
            .find(|k| k.tag == tag)
            .map(|k| k.public_key.as_str())
    }

    /// Checksummed output descriptors.
    pub fn output_descriptors(&self) -> &DescriptorSet {
        &self.output_descriptors
    }
}
