use std::path::PathBuf;

use errgen_render::{EmittedArtifact, TargetLanguage};

#[derive(Debug)]
pub struct GenerateResult {
    pub source_name: String,
    pub output_dir: PathBuf,
    pub attributes: usize,
    pub records: usize,
    pub languages: Vec<LanguageSummary>,
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn artifact_count(&self) -> usize {
        self.languages.iter().map(|summary| summary.artifacts.len()).sum()
    }
}

#[derive(Debug)]
pub struct LanguageSummary {
    pub language: TargetLanguage,
    pub artifacts: Vec<EmittedArtifact>,
}

impl LanguageSummary {
    pub fn bytes(&self) -> usize {
        self.artifacts.iter().map(|artifact| artifact.bytes).sum()
    }
}
