//! Prelude re-exports common types.
pub use ek_core::{
    DescriptorSet, EncryptedKeyRecord, ErrorKind, MetadataKeyEntry,
    MetadataPublicKeyEntry, MetadataRecord, PublicKeyTag, METADATA_VERSION,
};
pub use ek_document::{AttachmentOptions, METADATA_ATTACHMENT};

// Ensure top-level versions take precedence
pub use crate::{
    verification_code, ContentRenderer, EmergencyKit, Error, KeyShare,
    KitConfig, KitContent, KitInput, KitOutput, RenderError, Result, Stage,
};
