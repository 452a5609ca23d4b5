use std::path::PathBuf;

/// Errors that abort a build. Validation problems are not errors here; they
/// are collected in the compile report instead.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A directory could not be created or listed.
    #[error("directory error at {path}: {source}")]
    Dir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A source file is not valid JSON for its expected shape.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A value could not be serialized for output.
    #[error("serialization error for {file}: {detail}")]
    Serialize { file: PathBuf, detail: String },

    /// The config file exists but could not be used.
    #[error("invalid config {file}: {detail}")]
    Config { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
