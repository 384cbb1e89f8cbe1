use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal to the run. The binary prints the `Display` form
/// once and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("markdown conversion failed: {0}")]
    Conversion(String),

    #[error("missing body")]
    MissingBody,

    #[error("missing required metadata: {0}")]
    MissingMetadata(&'static str),

    #[error("invalid id '{0}': only lowercase letters are allowed")]
    InvalidId(String),

    #[error("id '{0}' cannot be used as an output file name")]
    UnsafeId(String),

    #[error("duplicate id '{0}'")]
    DuplicateId(String),

    #[error("date '{value}' does not match the pattern '{pattern}'")]
    InvalidDate { value: String, pattern: String },

    #[error("formatting a date with '{pattern}' failed")]
    DateFormat { pattern: String },

    #[error("missing closing bracket in placeholder")]
    MissingClosingBracket,

    #[error("writing output: {0}")]
    Output(#[from] io::Error),

    #[error("configuration: {0}")]
    Config(String),

    #[error("{}: {source}", .path.display())]
    InPost {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches the path of the document being processed.
    pub fn in_post(self, path: impl Into<PathBuf>) -> Error {
        Error::InPost {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Looks through `InPost` annotations.
    pub fn root(&self) -> &Error {
        match self {
            Error::InPost { source, .. } => source.root(),
            other => other,
        }
    }
}
