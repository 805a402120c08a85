//! Backend port: the single seam between the widgets and the network.
//!
//! `HttpBackend` is the real implementation; tests swap in a scripted fake.

use async_trait::async_trait;

use crate::errors::DashboardError;
use crate::models::{FileHandle, SearchResponse, UploadResult};

pub mod csrf;
pub mod http;

pub use http::HttpBackend;

/// Multipart field carrying each uploaded file.
pub const UPLOAD_FIELD: &str = "resumes";

#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Target URL, absolute or relative to the backend's base URL.
    pub action: String,
    pub files: Vec<FileHandle>,
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub fields: Vec<(String, String)>,
    pub csrf_token: Option<String>,
}

#[async_trait]
pub trait DashboardBackend: Send + Sync {
    /// Posts the files. Non-2xx statuses are errors; a `success: false` body
    /// is returned as-is for the caller to interpret.
    async fn upload(&self, request: UploadRequest) -> Result<UploadResult, DashboardError>;

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, DashboardError>;
}
