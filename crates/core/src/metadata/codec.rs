use super::{validate_public_key, MetadataRecord, METADATA_VERSION};
use crate::{Error, Result};
use serde_json::Value;

impl MetadataRecord {
    /// Serialize to the opaque transport string.
    pub fn serialize(&self) -> Result<String> {
        let opaque = serde_json::to_string(self)?;
        tracing::debug!(len = %opaque.len(), "metadata::serialize");
        Ok(opaque)
    }

    /// Deserialize from the opaque transport string.
    ///
    /// The version is checked before anything else as it
    /// determines the grammar of the remaining fields.
    pub fn deserialize(opaque: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(opaque)?;
        let version = value
            .get("version")
            .and_then(Value::as_u64)
            .ok_or(Error::MissingVersion)?;
        if version != METADATA_VERSION as u64 {
            return Err(Error::VersionMismatch {
                found: version,
                expected: METADATA_VERSION,
            });
        }

        let record: MetadataRecord = serde_json::from_value(value)?;
        for key in &record.encrypted_keys {
            key.validate()?;
        }
        for entry in &record.public_keys {
            validate_public_key(&entry.public_key).map_err(|_| {
                Error::MetadataPublicKey(entry.public_key.clone())
            })?;
        }
        record.output_descriptors.verify()?;

        tracing::debug!(
            birthday_block = %record.birthday_block,
            "metadata::deserialize"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        encrypted_key::{
            EncryptedKeyRecord, CIPHER_TEXT_LEN, EPHEMERAL_KEY_LEN, SALT_LEN,
        },
        metadata::{MetadataRecord, METADATA_VERSION},
        Error, ErrorKind,
    };
    use anyhow::Result;
    use serde_json::{json, Value};

    const SWAP_SERVER_KEY: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn mock_metadata() -> Result<MetadataRecord> {
        let first = EncryptedKeyRecord::new(
            1_024,
            [0x02; EPHEMERAL_KEY_LEN],
            [0xaa; CIPHER_TEXT_LEN],
            [0x01; SALT_LEN],
        );
        let second = EncryptedKeyRecord::new(
            700_000,
            [0x03; EPHEMERAL_KEY_LEN],
            [0xbb; CIPHER_TEXT_LEN],
            [0x02; SALT_LEN],
        );
        Ok(MetadataRecord::assemble(
            &first,
            &second,
            ("AABBCCDD", "11223344"),
            SWAP_SERVER_KEY,
        )?)
    }

    fn mock_value() -> Result<Value> {
        Ok(serde_json::from_str(&mock_metadata()?.serialize()?)?)
    }

    #[test]
    fn metadata_codec_round_trip() -> Result<()> {
        let metadata = mock_metadata()?;
        let opaque = metadata.serialize()?;
        assert_eq!(metadata, MetadataRecord::deserialize(&opaque)?);
        Ok(())
    }

    #[test]
    fn metadata_codec_wire_fields() -> Result<()> {
        let value = mock_value()?;
        assert_eq!(json!(METADATA_VERSION), value["version"]);
        assert_eq!(json!(700_000), value["birthdayBlock"]);
        assert_eq!(json!("swap_server"), value["publicKeys"][0]["tag"]);
        assert_eq!(json!(SWAP_SERVER_KEY), value["publicKeys"][0]["publicKey"]);

        let keys = value["encryptedKeys"].as_array().unwrap();
        assert_eq!(2, keys.len());
        assert_eq!(json!("01".repeat(SALT_LEN)), keys[0]["salt"]);
        assert_eq!(json!("bb".repeat(CIPHER_TEXT_LEN)), keys[1]["encryptedPrivKey"]);
        assert_eq!(json!("03".repeat(EPHEMERAL_KEY_LEN)), keys[1]["dhPubKey"]);
        assert_eq!(4, value["outputDescriptors"].as_array().unwrap().len());
        Ok(())
    }

    #[test]
    fn metadata_codec_field_order_is_irrelevant() -> Result<()> {
        let mut value = mock_value()?;
        let object = value.as_object_mut().unwrap();
        let version = object.remove("version").unwrap();
        object.insert("version".to_string(), version);
        let opaque = value.to_string();
        assert_eq!(mock_metadata()?, MetadataRecord::deserialize(&opaque)?);
        Ok(())
    }

    #[test]
    fn metadata_codec_version_mismatch() -> Result<()> {
        let mut value = mock_value()?;
        value["version"] = json!(2);
        let err = MetadataRecord::deserialize(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            Error::VersionMismatch {
                found: 2,
                expected: METADATA_VERSION
            }
        ));
        assert_eq!(ErrorKind::VersionMismatch, err.kind());

        // Version is checked before the rest of the grammar
        let err = MetadataRecord::deserialize(r#"{"version":4}"#).unwrap_err();
        assert_eq!(ErrorKind::VersionMismatch, err.kind());
        Ok(())
    }

    #[test]
    fn metadata_codec_parse_errors() -> Result<()> {
        let cases = {
            let mut missing_version = mock_value()?;
            missing_version.as_object_mut().unwrap().remove("version");

            let mut one_key = mock_value()?;
            one_key["encryptedKeys"].as_array_mut().unwrap().pop();

            let mut bad_hex = mock_value()?;
            bad_hex["encryptedKeys"][0]["salt"] = json!("not hex");

            let mut short_salt = mock_value()?;
            short_salt["encryptedKeys"][1]["salt"] = json!("0102");

            let mut bad_descriptor = mock_value()?;
            bad_descriptor["outputDescriptors"][0] = json!("wsh(multi(2))#qqqqqqqq");

            let mut unknown_tag = mock_value()?;
            unknown_tag["publicKeys"][0]["tag"] = json!("cosigner");

            let mut bad_public_key = mock_value()?;
            bad_public_key["publicKeys"][0]["publicKey"] = json!("02ab");

            let mut extra_field = mock_value()?;
            extra_field["extra"] = json!(true);

            vec![
                "".to_string(),
                "not json".to_string(),
                missing_version.to_string(),
                one_key.to_string(),
                bad_hex.to_string(),
                short_salt.to_string(),
                bad_descriptor.to_string(),
                unknown_tag.to_string(),
                bad_public_key.to_string(),
                extra_field.to_string(),
            ]
        };

        for opaque in cases {
            let err = MetadataRecord::deserialize(&opaque).unwrap_err();
            assert_eq!(ErrorKind::Parse, err.kind(), "{opaque}");
        }
        Ok(())
    }
}
