#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Log tracing output to the console or to disc.
mod error;
mod logger;

pub use error::Error;
pub use logger::{Logger, DEFAULT_FILTER, LOG_FILE_NAME};

pub(crate) type Result<T> = std::result::Result<T, Error>;
