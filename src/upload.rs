use crate::bridge;
use crate::error::{ReadinessError, Result};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

const DEFAULT_SCAN_ROLE: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub mime: Option<String>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: Option<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime,
        }
    }

    pub fn from_path(path: &Path, mime: Option<String>) -> Result<Self> {
        if !path.is_file() {
            return Err(ReadinessError::PathNotFound(path.display().to_string()));
        }
        let size_bytes = std::fs::metadata(path)?.len();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, size_bytes, mime))
    }

    pub fn extension(&self) -> String {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }

    pub fn is_accepted(&self) -> bool {
        let mime_ok = self
            .mime
            .as_deref()
            .is_some_and(|mime| ACCEPTED_MIME_TYPES.contains(&mime));
        mime_ok || ACCEPTED_EXTENSIONS.contains(&self.extension().as_str())
    }

    pub fn meta_line(&self) -> String {
        format!("{} • {:.1} KB", self.name, self.size_bytes as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Use a PDF/DOC/DOCX file")]
    InvalidSelection,

    #[error("Please upload a file first")]
    MissingFile,

    #[error("Unsupported format (PDF/DOC/DOCX)")]
    UnsupportedFormat,
}

#[derive(Debug, Clone, Default)]
pub struct UploadState {
    selected: Option<FileCandidate>,
    meta: Option<String>,
    error: Option<UploadRejection>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_drop(&mut self, file: Option<FileCandidate>) {
        match file.filter(FileCandidate::is_accepted) {
            Some(file) => self.accept(file),
            None => {
                self.selected = None;
                self.reject_selection();
            }
        }
    }

    pub fn on_pick(&mut self, file: Option<FileCandidate>) {
        match file {
            Some(file) if file.is_accepted() => self.accept(file),
            other => {
                self.selected = other;
                self.reject_selection();
            }
        }
    }

    fn accept(&mut self, file: FileCandidate) {
        self.meta = Some(file.meta_line());
        self.selected = Some(file);
        self.error = None;
    }

    fn reject_selection(&mut self) {
        self.meta = None;
        self.error = Some(UploadRejection::InvalidSelection);
    }

    pub fn meta(&self) -> Option<&str> {
        self.meta.as_deref()
    }

    pub fn error(&self) -> Option<UploadRejection> {
        self.error
    }

    pub fn scan(&mut self, role: Option<&str>) -> std::result::Result<ScanRequest, UploadRejection> {
        let outcome = match &self.selected {
            None => Err(UploadRejection::MissingFile),
            Some(file) if !file.is_accepted() => Err(UploadRejection::UnsupportedFormat),
            Some(file) => {
                let role = role
                    .map(str::trim)
                    .filter(|role| !role.is_empty())
                    .unwrap_or(DEFAULT_SCAN_ROLE);
                Ok(ScanRequest {
                    file: file.clone(),
                    next: bridge::form_link(role),
                })
            }
        };
        self.error = outcome.as_ref().err().copied();
        outcome
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub file: FileCandidate,
    pub next: String,
}

impl ScanRequest {
    pub fn run(self, delay: Duration) -> String {
        tracing::info!(file = %self.file.name, delay_ms = delay.as_millis() as u64, "scanning");
        std::thread::sleep(delay);
        self.next
    }
}
