use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackError>;

/// Failures that abort a packing run. None of these are recovered from:
/// every error propagates to the binary entry point and exits non-zero.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("cannot read configuration file `{path}`")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in `{path}`")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot open source file `{path}`")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{path}` does not start with a documentation comment block")]
    MissingHeader { path: PathBuf },

    #[error("cannot write output file `{path}`")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
