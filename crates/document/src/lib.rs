//! Embed and extract Emergency Kit metadata in rendered PDF documents.
//!
//! Metadata is stored as an embedded file in the catalog's
//! `/Names /EmbeddedFiles` name tree. Pages and their content
//! streams are never modified.
//!
//! [page_contents] returns the content stream of every page so
//! callers can check that an embedded kit still shows exactly
//! what was rendered.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod name_tree;
mod reader;
mod writer;

pub use error::Error;
pub use reader::{extract, extract_file, page_contents};
pub use writer::{embed, embed_file};

use serde::{Deserialize, Serialize};

/// Default name of the metadata attachment.
pub const METADATA_ATTACHMENT: &str = "metadata.json";

/// Default description of the metadata attachment.
pub const METADATA_DESCRIPTION: &str = "Emergency Kit metadata";

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Options for the metadata attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentOptions {
    /// Attachment file name.
    pub name: String,
    /// Human readable description.
    pub description: String,
}

impl Default for AttachmentOptions {
    fn default() -> Self {
        Self {
            name: METADATA_ATTACHMENT.to_string(),
            description: METADATA_DESCRIPTION.to_string(),
        }
    }
}

pub(crate) fn load(buffer: &[u8]) -> Result<lopdf::Document> {
    Ok(lopdf::Document::load_mem(buffer)?)
}
