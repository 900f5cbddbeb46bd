use super::{
    MetadataKeyEntry, MetadataPublicKeyEntry, MetadataRecord, PublicKeyTag,
    METADATA_VERSION,
};
use crate::{
    descriptor::build_descriptors, encrypted_key::EncryptedKeyRecord, Error,
    Result,
};

/// Length of a compressed SEC1 public key.
const COMPRESSED_KEY_LEN: usize = 33;

impl MetadataRecord {
    /// Assemble the metadata for a pair of decoded keys.
    ///
    /// The birthday block is taken from the second key which
    /// anchors recovery scanning.
    pub fn assemble(
        first: &EncryptedKeyRecord,
        second: &EncryptedKeyRecord,
        fingerprints: (&str, &str),
        swap_server_public_key: &str,
    ) -> Result<Self> {
        validate_public_key(swap_server_public_key)?;
        let output_descriptors =
            build_descriptors(fingerprints.0, fingerprints.1)?;

        let record = Self {
            version: METADATA_VERSION,
            birthday_block: second.birthday(),
            encrypted_keys: [first.into(), second.into()],
            public_keys: vec![MetadataPublicKeyEntry {
                tag: PublicKeyTag::SwapServer,
                public_key: swap_server_public_key.to_owned(),
            }],
            output_descriptors,
        };

        tracing::debug!(
            version = %record.version,
            birthday_block = %record.birthday_block,
            descriptors = %record.output_descriptors.len(),
            "metadata::assemble"
        );

        Ok(record)
    }
}

/// Validate a hex encoded compressed secp256k1 public key.
pub fn validate_public_key(public_key: &str) -> Result<()> {
    let invalid = || Error::InvalidPublicKey(public_key.to_owned());
    let bytes = hex::decode(public_key).map_err(|_| invalid())?;
    if bytes.len() != COMPRESSED_KEY_LEN {
        return Err(invalid());
    }
    k256::PublicKey::from_sec1_bytes(&bytes).map_err(|_| invalid())?;
    Ok(())
}

impl MetadataKeyEntry {
    pub(super) fn validate(&self) -> Result<()> {
        use crate::encrypted_key::{
            CIPHER_TEXT_LEN, EPHEMERAL_KEY_LEN, SALT_LEN,
        };
        validate_hex("dhPubKey", &self.dh_pub_key, EPHEMERAL_KEY_LEN)?;
        validate_hex(
            "encryptedPrivKey",
            &self.encrypted_priv_key,
            CIPHER_TEXT_LEN,
        )?;
        validate_hex("salt", &self.salt, SALT_LEN)?;
        Ok(())
    }
}

fn validate_hex(field: &'static str, value: &str, expected: usize) -> Result<()> {
    let bytes = hex::decode(value)
        .map_err(|source| Error::FieldHex { field, source })?;
    if bytes.len() != expected {
        return Err(Error::FieldLength {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
