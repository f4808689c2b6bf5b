use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to mark {filename}")]
    Font {
        filename: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = result::Result<T, Error>;
