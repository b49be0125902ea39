//! Artifact I/O: reading the source document and writing generated files.
//!
//! Writes go through a temporary sibling file and a rename, so a reader
//! never observes a half-written output.

use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Errors from artifact operations.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Read the raw bytes of a source document.
pub fn read_document(path: impl AsRef<Path>) -> Result<Vec<u8>, ArtifactError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Read a previously generated file, or `None` if it does not exist.
pub fn read_existing(path: impl AsRef<Path>) -> Result<Option<String>, ArtifactError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ArtifactError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_artifact(path: impl AsRef<Path>, contents: &str) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    let write_err = |target: &Path, e: io::Error| ArtifactError::Write {
        path: target.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), ArtifactError> {
        let file = File::create(&tmp_path).map_err(|e| write_err(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| write_err(&tmp_path, e))?;
        let file = writer
            .into_inner()
            .map_err(|e| write_err(&tmp_path, e.into_error()))?;
        file.sync_all().map_err(|e| write_err(&tmp_path, e))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_err(path, e)
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

/// Hex sha256 of generated contents, used to compare outputs in reports.
pub fn content_digest(contents: &str) -> String {
    let hash = Sha256::digest(contents.as_bytes());
    format!("{hash:x}")
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
