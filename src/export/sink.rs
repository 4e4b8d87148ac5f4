//! Artifact delivery.
//!
//! The export action never touches the filesystem directly; it hands the
//! finished bytes to an [`ArtifactSink`].

use crate::model::ExportError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Capability to deliver a finished file to the user.
pub trait ArtifactSink {
    /// Deliver `bytes` as a file named `file_name`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the artifact cannot be stored.
    fn deliver(&mut self, bytes: &[u8], file_name: &str, mime_type: &str)
        -> Result<(), ExportError>;
}

/// Writes artifacts into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir`, created on first delivery if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where an artifact named `file_name` ends up.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(
        &mut self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(file_name);
        std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = bytes.len(), mime_type, "Artifact written");
        Ok(())
    }
}

/// A delivered artifact held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name requested by the exporter.
    pub file_name: String,
    /// MIME type of the content.
    pub mime_type: String,
    /// File content.
    pub bytes: Vec<u8>,
}

/// Keeps delivered artifacts in memory (embedding hosts, tests).
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    artifacts: Vec<Artifact>,
}

impl CollectingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every artifact delivered so far, oldest first.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Most recently delivered artifact.
    pub fn last(&self) -> Option<&Artifact> {
        self.artifacts.last()
    }
}

impl ArtifactSink for CollectingSink {
    fn deliver(
        &mut self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<(), ExportError> {
        self.artifacts.push(Artifact {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
