//! Structural codec for encrypted private keys.
//!
//! An encrypted key is a base58 string (no checksum) wrapping
//! a fixed binary layout:
//!
//! ```text
//! version (1) | birthday (2 or 4, big endian) | ephemeral key (33)
//!             | cipher text (64) | salt (8)
//! ```
//!
//! Version 1 stores the birthday in 16 bits, version 2 in 32 bits.
//! Decoding never decrypts anything.
use crate::{Error, Result};

/// Length of a compressed SEC1 public key.
pub const EPHEMERAL_KEY_LEN: usize = 33;

/// Length of the encrypted private key material.
pub const CIPHER_TEXT_LEN: usize = 64;

/// Length of the recovery code salt.
pub const SALT_LEN: usize = 8;

/// Layout version with a 16 bit birthday.
pub const KEY_VERSION_COMPACT: u8 = 1;

/// Layout version with a 32 bit birthday.
pub const KEY_VERSION_WIDE: u8 = 2;

const BODY_LEN: usize = EPHEMERAL_KEY_LEN + CIPHER_TEXT_LEN + SALT_LEN;

/// Encrypted private key decoded into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedKeyRecord {
    version: u8,
    birthday: u32,
    ephemeral_public_key: [u8; EPHEMERAL_KEY_LEN],
    cipher_text: [u8; CIPHER_TEXT_LEN],
    salt: [u8; SALT_LEN],
}

impl EncryptedKeyRecord {
    /// Create a record from its parts.
    ///
    /// The layout version is the smallest one able
    /// to hold the birthday.
    pub fn new(
        birthday: u32,
        ephemeral_public_key: [u8; EPHEMERAL_KEY_LEN],
        cipher_text: [u8; CIPHER_TEXT_LEN],
        salt: [u8; SALT_LEN],
    ) -> Self {
        let version = if birthday <= u16::MAX as u32 {
            KEY_VERSION_COMPACT
        } else {
            KEY_VERSION_WIDE
        };
        Self {
            version,
            birthday,
            ephemeral_public_key,
            cipher_text,
            salt,
        }
    }

    /// Decode an opaque encrypted key string.
    pub fn decode(opaque: &str) -> Result<Self> {
        let buffer = bs58::decode(opaque.trim()).into_vec()?;
        let (&version, rest) =
            buffer.split_first().ok_or(Error::KeyEmpty)?;

        let birthday_len = match version {
            KEY_VERSION_COMPACT => 2,
            KEY_VERSION_WIDE => 4,
            _ => return Err(Error::KeyVersion(version)),
        };

        let expected = 1 + birthday_len + BODY_LEN;
        if buffer.len() != expected {
            return Err(Error::KeyLength {
                version,
                expected,
                actual: buffer.len(),
            });
        }

        let (birthday, rest) = rest.split_at(birthday_len);
        let birthday = birthday
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | *byte as u32);

        let (ephemeral, rest) = rest.split_at(EPHEMERAL_KEY_LEN);
        let (cipher_text, salt) = rest.split_at(CIPHER_TEXT_LEN);

        let mut record = Self {
            version,
            birthday,
            ephemeral_public_key: [0; EPHEMERAL_KEY_LEN],
            cipher_text: [0; CIPHER_TEXT_LEN],
            salt: [0; SALT_LEN],
        };
        record.ephemeral_public_key.copy_from_slice(ephemeral);
        record.cipher_text.copy_from_slice(cipher_text);
        record.salt.copy_from_slice(salt);

        tracing::debug!(
            version = %record.version,
            birthday = %record.birthday,
            "encrypted_key::decode"
        );

        Ok(record)
    }

    /// Encode this record to an opaque string.
    pub fn encode(&self) -> String {
        let mut buffer = Vec::with_capacity(1 + 4 + BODY_LEN);
        buffer.push(self.version);
        match self.version {
            KEY_VERSION_COMPACT => {
                buffer.extend_from_slice(&(self.birthday as u16).to_be_bytes())
            }
            _ => buffer.extend_from_slice(&self.birthday.to_be_bytes()),
        }
        buffer.extend_from_slice(&self.ephemeral_public_key);
        buffer.extend_from_slice(&self.cipher_text);
        buffer.extend_from_slice(&self.salt);
        bs58::encode(buffer).into_string()
    }

    /// Layout version this record was decoded from.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Block height bounding the earliest funding transaction.
    pub fn birthday(&self) -> u32 {
        self.birthday
    }

    /// Ephemeral public key used for the key agreement.
    pub fn ephemeral_public_key(&self) -> &[u8; EPHEMERAL_KEY_LEN] {
        &self.ephemeral_public_key
    }

    /// Encrypted private key material.
    pub fn cipher_text(&self) -> &[u8; CIPHER_TEXT_LEN] {
        &self.cipher_text
    }

    /// Salt for the recovery code key derivation.
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }
}
