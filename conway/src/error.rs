// error.rs - Errors raised while building or editing a grid

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("data file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("data file {} cannot be read", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cell (col {col}, row {row}) is outside the {cols}x{rows} grid")]
    IndexOutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
