// src/convert/error.rs

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure modes of a conversion: either the filesystem or the input text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be read, or the output could not be written.
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input was not valid delimited UTF-8 text.
    #[error("malformed csv in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ConvertError {
    /// Reclassify a csv-crate error for `path`: io failures stay in the io
    /// taxonomy, everything else is a parse failure.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(source) => Self::Io {
                    path: path.to_path_buf(),
                    source,
                },
                // is_io_error() guarantees the Io kind
                _ => unreachable!(),
            }
        } else {
            Self::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}
