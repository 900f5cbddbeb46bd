//! Emergency Kit generation and embedding.
use crate::{
    verification_code, ContentRenderer, Error, KeyShare, KitConfig,
    KitContent, Result,
};
use ek_core::{EncryptedKeyRecord, MetadataRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Key material for a kit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitInput {
    /// First encrypted key share.
    pub first_encrypted_key: String,
    /// Fingerprint of the first key.
    pub first_fingerprint: String,
    /// Second encrypted key share.
    pub second_encrypted_key: String,
    /// Fingerprint of the second key.
    pub second_fingerprint: String,
    /// Swap server public key, hex encoded.
    pub swap_server_public_key: String,
}

/// Generated kit content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitOutput {
    /// Rendered content.
    pub content: String,
    /// Code the user confirms after printing.
    pub verification_code: String,
    /// Opaque metadata to embed once the content is a PDF.
    pub metadata: String,
}

/// Generate, embed and read Emergency Kits.
///
/// Holds no state besides configuration so calls
/// may run concurrently.
pub struct EmergencyKit<R> {
    config: KitConfig,
    renderer: R,
}

impl<R> EmergencyKit<R> {
    /// Create with the default configuration.
    pub fn new(renderer: R) -> Self {
        Self::with_config(Default::default(), renderer)
    }

    /// Create with a configuration.
    pub fn with_config(config: KitConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Configuration.
    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    /// Decode both keys and assemble the metadata record.
    pub fn metadata(&self, input: &KitInput) -> Result<MetadataRecord> {
        let first = EncryptedKeyRecord::decode(&input.first_encrypted_key)
            .map_err(|source| Error::Decode {
                share: KeyShare::First,
                source,
            })?;
        let second = EncryptedKeyRecord::decode(&input.second_encrypted_key)
            .map_err(|source| Error::Decode {
                share: KeyShare::Second,
                source,
            })?;

        MetadataRecord::assemble(
            &first,
            &second,
            (
                input.first_fingerprint.as_str(),
                input.second_fingerprint.as_str(),
            ),
            &input.swap_server_public_key,
        )
        .map_err(Error::Build)
    }

    /// Embed opaque metadata into the PDF at `source`, writing
    /// the result to `destination`.
    ///
    /// The metadata is validated first and embedded exactly
    /// as given. Callers must not target the same destination
    /// from concurrent calls.
    pub async fn embed(
        &self,
        metadata: &str,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<()> {
        let record =
            MetadataRecord::deserialize(metadata).map_err(Error::Deserialize)?;

        ek_document::embed_file(
            metadata,
            source.as_ref(),
            destination.as_ref(),
            &self.config.attachment,
        )
        .await
        .map_err(Error::Embed)?;

        tracing::info!(
            birthday_block = %record.birthday_block(),
            destination = %destination.as_ref().display(),
            "kit::embed"
        );
        Ok(())
    }

    /// Read the metadata embedded in a kit.
    pub async fn read_metadata(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<MetadataRecord> {
        let metadata =
            ek_document::extract_file(path, &self.config.attachment.name)
                .await
                .map_err(Error::Extract)?;
        MetadataRecord::deserialize(&metadata).map_err(Error::Deserialize)
    }
}

impl<R: ContentRenderer> EmergencyKit<R> {
    /// Generate the kit content, verification code and
    /// opaque metadata.
    pub fn generate(
        &self,
        input: &KitInput,
        language: &str,
    ) -> Result<KitOutput> {
        if !self.config.supports_language(language) {
            return Err(Error::UnsupportedLanguage(language.to_owned()));
        }

        let metadata = self.metadata(input)?;
        let verification_code = verification_code(
            &input.first_encrypted_key,
            &input.second_encrypted_key,
        );

        let content = self
            .renderer
            .render(
                &KitContent {
                    input,
                    verification_code: &verification_code,
                    descriptors: metadata.output_descriptors(),
                    birthday_block: metadata.birthday_block(),
                },
                language,
            )
            .map_err(Error::Render)?;

        let opaque = metadata.serialize().map_err(Error::Serialize)?;

        tracing::info!(
            language = %language,
            birthday_block = %metadata.birthday_block(),
            "kit::generate"
        );

        Ok(KitOutput {
            content,
            verification_code,
            metadata: opaque,
        })
    }
}
