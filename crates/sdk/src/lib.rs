#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Generate and embed Emergency Kit recovery documents.
//!
//! Generation decodes both encrypted key shares, derives the
//! output descriptors, renders the kit content and serializes
//! the metadata. Once the host has turned the content into a
//! PDF the opaque metadata is embedded with [EmergencyKit::embed]
//! and can later be read back with [EmergencyKit::read_metadata].

mod config;
mod error;
mod kit;
pub mod prelude;
mod render;
mod verification;

pub use config::KitConfig;
pub use error::{Error, KeyShare, Stage};
pub use kit::{EmergencyKit, KitInput, KitOutput};
pub use render::{ContentRenderer, KitContent, RenderError};
pub use verification::{verification_code, VERIFICATION_CODE_LEN};

pub use ek_core as core;
pub use ek_document as document;
#[cfg(feature = "logs")]
pub use ek_logs as logs;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
