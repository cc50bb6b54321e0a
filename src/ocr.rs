//! Where transcript text comes from.
//!
//! Recognition itself happens in an external document-understanding service.
//! This crate only consumes its output, so a source is anything that can hand
//! back the recognized text of one transcript.

use crate::error::{AdmitError, AdmitResult};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub trait TextSource {
    /// Short name used in logs and report headings.
    fn label(&self) -> String;

    fn read_text(&self) -> AdmitResult<String>;
}

/// Text already recognized and saved to disk.
#[derive(Debug, Clone)]
pub struct TranscriptFile {
    path: PathBuf,
}

impl TranscriptFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TextSource for TranscriptFile {
    fn label(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn read_text(&self) -> AdmitResult<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            AdmitError::Source(format!("Could not read '{}': {}", self.path.display(), e))
        })
    }
}

/// Recognized text piped in on standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinText;

impl TextSource for StdinText {
    fn label(&self) -> String {
        "stdin".to_string()
    }

    fn read_text(&self) -> AdmitResult<String> {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Text held in memory, e.g. handed over by an OCR client.
#[derive(Debug, Clone)]
pub struct InlineText {
    pub label: String,
    pub text: String,
}

impl TextSource for InlineText {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn read_text(&self) -> AdmitResult<String> {
        Ok(self.text.clone())
    }
}

/// Every `*.txt` file directly inside `dir`, sorted by path.
pub fn transcripts_in_dir<P: AsRef<Path>>(dir: P) -> AdmitResult<Vec<TranscriptFile>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(AdmitError::Source(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths.into_iter().map(TranscriptFile::new).collect())
}
