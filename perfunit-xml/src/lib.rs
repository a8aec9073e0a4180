//! Minimal XML document tree and indented serializer used for JUnit reports.

mod element;
mod writer;

use std::path::PathBuf;

pub use element::Element;
pub use writer::{render, write_document};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write xml events: {0}")]
    Encode(#[from] std::io::Error),
}
