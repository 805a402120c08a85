#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bytes::Bytes;
use uuid::Uuid;

use crate::errors::DashboardError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOC_MIME: &str = "application/msword";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const ACCEPTED_MIME_TYPES: [&str; 3] = [PDF_MIME, DOC_MIME, DOCX_MIME];

/// Identity of a candidate file. Two handles are the same file only if they
/// share an id, regardless of name or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(Uuid);

impl FileId {
    fn new() -> Self {
        FileId(Uuid::new_v4())
    }
}

#[derive(Debug, Clone)]
pub enum FileSource {
    Memory(Bytes),
    Disk(PathBuf),
}

/// A file offered by the user through drag-and-drop or the file picker.
#[derive(Debug, Clone)]
pub struct FileHandle {
    id: FileId,
    name: String,
    mime: String,
    size: u64,
    source: FileSource,
}

impl FileHandle {
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            id: FileId::new(),
            name: name.into(),
            mime: mime.into(),
            size: data.len() as u64,
            source: FileSource::Memory(data),
        }
    }

    /// Builds a handle for a file on disk. The MIME type is derived from the
    /// extension and left blank when the extension is unknown.
    pub async fn from_path(path: &Path) -> Result<Self, DashboardError> {
        let metadata = tokio::fs::metadata(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_for_name(&name).to_string();

        Ok(Self {
            id: FileId::new(),
            name,
            mime,
            size: metadata.len(),
            source: FileSource::Disk(path.to_path_buf()),
        })
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Loads the file contents for upload.
    pub async fn read(&self) -> Result<Bytes, DashboardError> {
        match &self.source {
            FileSource::Memory(data) => Ok(data.clone()),
            FileSource::Disk(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
        }
    }

    /// PDF, DOC and DOCX by MIME type. Browsers sometimes report a blank type
    /// for PDFs, so a `.pdf` name is accepted on its own.
    pub fn is_accepted(&self) -> bool {
        ACCEPTED_MIME_TYPES.contains(&self.mime.as_str())
            || self.name.to_lowercase().ends_with(".pdf")
    }
}

/// Content type for a file name, mirroring the backend's extension map.
pub fn mime_for_name(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("pdf") => PDF_MIME,
        Some("doc") => DOC_MIME,
        Some("docx") => DOCX_MIME,
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("tiff") => "image/tiff",
        Some("bmp") => "image/bmp",
        _ => "",
    }
}

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// One rendered row of the pending-file list.
#[derive(Debug, Clone, PartialEq)]
pub struct FileItem {
    pub id: FileId,
    pub name: String,
    pub size_label: String,
    pub icon: &'static str,
}

impl From<&FileHandle> for FileItem {
    fn from(file: &FileHandle) -> Self {
        FileItem {
            id: file.id(),
            name: file.name().to_string(),
            size_label: format_file_size(file.size()),
            icon: file_icon(file.name()),
        }
    }
}

/// Icon classes keyed by extension.
pub fn file_icon(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("pdf") => "bi-file-pdf text-danger",
        Some("doc") | Some("docx") => "bi-file-word text-primary",
        _ => "bi-file-text text-secondary",
    }
}

/// Human-readable size with at most two decimals: `0 Bytes`, `1 KB`, `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
