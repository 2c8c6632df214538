//! Artifact emission.
//!
//! Rendering happens entirely in memory; a sink only sees finished artifacts.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::common::Artifact;
use crate::language::TargetLanguage;

/// Where an artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifact {
    pub name: String,
    pub language: TargetLanguage,
    pub location: PathBuf,
    pub bytes: usize,
}

/// Receives rendered artifacts.
pub trait EmissionSink {
    /// Store one artifact, replacing any earlier artifact with the same file name.
    fn emit(&mut self, artifact: &Artifact) -> Result<EmittedArtifact>;
}

/// Writes artifacts under `<root>/<language>/<file name>`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path an artifact is written to.
    pub fn path_for(&self, artifact: &Artifact) -> PathBuf {
        self.root
            .join(artifact.language.id())
            .join(artifact.file_name())
    }
}

impl EmissionSink for DirectorySink {
    fn emit(&mut self, artifact: &Artifact) -> Result<EmittedArtifact> {
        let path = self.path_for(artifact);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        fs::write(&path, &artifact.contents)
            .with_context(|| format!("write {} to {}", artifact.name, path.display()))?;
        debug!(
            artifact = %artifact.name,
            language = %artifact.language,
            path = %path.display(),
            bytes = artifact.contents.len(),
            "artifact written"
        );
        Ok(EmittedArtifact {
            name: artifact.name.clone(),
            language: artifact.language,
            location: path,
            bytes: artifact.contents.len(),
        })
    }
}

/// Keeps artifacts in memory, keyed by `<language>/<file name>`.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, language: TargetLanguage, file_name: &str) -> Option<&str> {
        self.files
            .get(&PathBuf::from(language.id()).join(file_name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl EmissionSink for MemorySink {
    fn emit(&mut self, artifact: &Artifact) -> Result<EmittedArtifact> {
        let location = PathBuf::from(artifact.language.id()).join(artifact.file_name());
        self.files
            .insert(location.clone(), artifact.contents.clone());
        Ok(EmittedArtifact {
            name: artifact.name.clone(),
            language: artifact.language,
            location,
            bytes: artifact.contents.len(),
        })
    }
}

/// Emit every artifact in order, stopping at the first failure.
pub fn emit_all<S: EmissionSink + ?Sized>(
    sink: &mut S,
    artifacts: &[Artifact],
) -> Result<Vec<EmittedArtifact>> {
    artifacts
        .iter()
        .map(|artifact| {
            sink.emit(artifact)
                .with_context(|| format!("emit {}", artifact.file_name()))
        })
        .collect()
}
