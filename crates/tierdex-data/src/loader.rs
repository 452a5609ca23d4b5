//! File discovery and JSON (de)serialization helpers.
//!
//! Every read and write in the pipeline goes through here so that failures
//! carry the path they happened on.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

// ===========================================================================
// Discovery
// ===========================================================================

/// List every `*.json` file directly inside `dir`, sorted by file name.
///
/// A directory that does not exist simply has no files.
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "source directory missing, nothing to load");
        return Ok(Vec::new());
    }

    let dir_err = |source| BuildError::Dir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(dir_err)? {
        let path = entry.map_err(dir_err)?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered source files");
    Ok(files)
}

/// The file name as a string, for messages and output names.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The file name without its extension, used as a fallback id.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ===========================================================================
// Reading and writing
// ===========================================================================

/// Read a JSON file into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BuildError> {
    let content = std::fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| BuildError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Render `value` as two-space indented JSON with a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T, path: &Path) -> Result<String, BuildError> {
    let mut text = serde_json::to_string_pretty(value).map_err(|e| BuildError::Serialize {
        file: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    text.push('\n');
    Ok(text)
}

/// Write `value` to `path`, replacing whatever was there.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BuildError> {
    let text = to_pretty_json(value, path)?;
    std::fs::write(path, text).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(dir).map_err(|source| BuildError::Dir {
        path: dir.to_path_buf(),
        source,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
