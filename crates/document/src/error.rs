use ek_core::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the document library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a document has no attachment
    /// with the requested name.
    #[error("document has no embedded metadata named {0:?}")]
    NotFound(String),

    /// Error generated when a name tree nests too deeply.
    #[error("document name tree exceeds the maximum depth of {0}")]
    NameTreeDepth(usize),

    /// Error generated when an attachment is not UTF-8 text.
    #[error("embedded metadata is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Error generated when a destination path has no file name.
    #[error("destination {0} is not a file path")]
    NotFile(PathBuf),

    /// Error generated by the PDF library.
    #[error(transparent)]
    Pdf(#[from] lopdf::Error),

    /// Error generated when a temporary file could not be
    /// moved into place.
    #[error(transparent)]
    Persist(#[from] tempfile::PathPersistError),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NameTreeDepth(_) | Self::Utf8(_) | Self::Pdf(_) => {
                ErrorKind::Format
            }
            Self::NotFile(_) | Self::Persist(_) | Self::Io(_) => ErrorKind::Io,
        }
    }
}
