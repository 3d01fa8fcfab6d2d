//! Failures that stop a parse before it starts.
//!
//! Everything wrong with the text itself is a diagnostic; this type only
//! covers getting the text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
}
