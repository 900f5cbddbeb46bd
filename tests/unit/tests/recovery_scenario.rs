use anyhow::Result;
use ek_core::descriptor::verify_descriptor;
use ek_sdk::prelude::*;
use ek_test_utils::{init_tracing, mock};

struct HtmlRenderer;

impl ContentRenderer for HtmlRenderer {
    fn render(
        &self,
        content: &KitContent<'_>,
        language: &str,
    ) -> std::result::Result<String, RenderError> {
        let descriptors: Vec<&str> = content.descriptors.iter().collect();
        Ok(format!(
            "<html lang=\"{language}\"><p>{}</p><pre>{}</pre></html>",
            content.verification_code,
            descriptors.join("\n"),
        ))
    }
}

fn scenario_input() -> KitInput {
    KitInput {
        first_encrypted_key: mock::encrypted_key(0x31, 512),
        first_fingerprint: mock::FIRST_FINGERPRINT.to_string(),
        second_encrypted_key: mock::encrypted_key(0x32, 700_000),
        second_fingerprint: mock::SECOND_FINGERPRINT.to_string(),
        swap_server_public_key: mock::SWAP_SERVER_KEY.to_string(),
    }
}

#[test]
fn recovery_metadata_assembled() -> Result<()> {
    let kit = EmergencyKit::new(HtmlRenderer);
    let input = scenario_input();
    let metadata = kit.metadata(&input)?;

    assert_eq!(METADATA_VERSION, metadata.version());
    assert_eq!(700_000, metadata.birthday_block());

    let first = EncryptedKeyRecord::decode(&input.first_encrypted_key)?;
    let second = EncryptedKeyRecord::decode(&input.second_encrypted_key)?;
    let [a, b] = metadata.encrypted_keys();
    assert_eq!(&MetadataKeyEntry::from(&first), a);
    assert_eq!(&MetadataKeyEntry::from(&second), b);
    assert_eq!(hex::encode(second.salt()), b.salt);

    assert_eq!(1, metadata.public_keys().len());
    assert_eq!(PublicKeyTag::SwapServer, metadata.public_keys()[0].tag);

    assert!(!metadata.output_descriptors().is_empty());
    for descriptor in metadata.output_descriptors().iter() {
        verify_descriptor(descriptor)?;
        assert!(descriptor.contains(mock::FIRST_FINGERPRINT));
        assert!(descriptor.contains(mock::SECOND_FINGERPRINT));
    }
    Ok(())
}

#[tokio::test]
async fn recovery_kit_end_to_end() -> Result<()> {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let rendered = dir.path().join("rendered.pdf");
    let published = dir.path().join("emergency-kit.pdf");

    let kit = EmergencyKit::new(HtmlRenderer);
    let input = scenario_input();
    let output = kit.generate(&input, "en")?;
    assert!(output.content.contains(&output.verification_code));

    // Host turns the content into a document
    let pdf = mock::pdf(&[output.verification_code.as_str()])?;
    tokio::fs::write(&rendered, pdf).await?;

    kit.embed(&output.metadata, &rendered, &published).await?;
    let recovered = kit.read_metadata(&published).await?;

    // Attachment holds the generated string byte for byte
    let document = tokio::fs::read(&published).await?;
    assert_eq!(
        output.metadata,
        ek_document::extract(&document, ek_document::METADATA_ATTACHMENT)?
    );
    assert_eq!(kit.metadata(&input)?, recovered);

    let descriptors: Vec<String> =
        recovered.output_descriptors().clone().into();
    for descriptor in &descriptors {
        assert!(output.content.contains(descriptor.as_str()));
    }
    Ok(())
}

#[tokio::test]
async fn recovery_kit_not_a_document() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let source = dir.path().join("not-a-document.bin");
    let destination = dir.path().join("dst.pdf");
    tokio::fs::write(&source, [0u8, 1, 2, 3, 4, 5, 6, 7]).await?;

    let kit = EmergencyKit::new(HtmlRenderer);
    let output = kit.generate(&scenario_input(), "en")?;
    let err = kit
        .embed(&output.metadata, &source, &destination)
        .await
        .unwrap_err();
    assert_eq!(ErrorKind::Format, err.kind());
    assert!(!destination.exists());
    Ok(())
}

#[tokio::test]
async fn recovery_kit_concurrent_generation() -> Result<()> {
    let kit = std::sync::Arc::new(EmergencyKit::new(HtmlRenderer));
    let mut handles = Vec::new();
    for language in ["en", "es"] {
        let kit = kit.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            kit.generate(&scenario_input(), language)
        }));
    }

    let mut metadata = Vec::new();
    for handle in handles {
        metadata.push(handle.await??.metadata);
    }
    assert_eq!(metadata[0], metadata[1]);
    Ok(())
}
