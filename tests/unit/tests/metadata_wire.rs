use anyhow::Result;
use ek_core::{MetadataRecord, METADATA_VERSION};
use ek_sdk::{verification_code, VERIFICATION_CODE_LEN};
use ek_test_utils::mock;
use serde_json::{json, Value};

fn mock_metadata() -> Result<MetadataRecord> {
    let first = mock::encrypted_key_record(0x40, 1);
    let second = mock::encrypted_key_record(0x41, 123_456);
    Ok(MetadataRecord::assemble(
        &first,
        &second,
        ("e5fb5b1d", "c0ffee00"),
        mock::SWAP_SERVER_KEY,
    )?)
}

#[test]
fn metadata_wire_format() -> Result<()> {
    let opaque = mock_metadata()?.serialize()?;
    let value: Value = serde_json::from_str(&opaque)?;

    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    keys.sort();
    assert_eq!(
        vec![
            "birthdayBlock",
            "encryptedKeys",
            "outputDescriptors",
            "publicKeys",
            "version"
        ],
        keys
    );
    assert_eq!(json!(METADATA_VERSION), value["version"]);
    assert_eq!(json!(123_456), value["birthdayBlock"]);
    Ok(())
}

#[test]
fn metadata_wire_accepts_reordered_fields() -> Result<()> {
    let compact: Value =
        serde_json::from_str(&mock_metadata()?.serialize()?)?;
    let reordered = json!({
        "outputDescriptors": compact["outputDescriptors"],
        "publicKeys": compact["publicKeys"],
        "encryptedKeys": compact["encryptedKeys"],
        "birthdayBlock": compact["birthdayBlock"],
        "version": compact["version"],
    });
    let opaque = serde_json::to_string_pretty(&reordered)?;
    assert_eq!(mock_metadata()?, MetadataRecord::deserialize(&opaque)?);
    Ok(())
}

#[test]
fn metadata_wire_verification_code() {
    let first = mock::encrypted_key(1, 10);
    let second = mock::encrypted_key(2, 20);
    let code = verification_code(&first, &second);
    assert_eq!(VERIFICATION_CODE_LEN, code.len());
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(code, verification_code(&first, &second));
}
