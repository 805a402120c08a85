use std::fmt;

use serde::{Deserialize, Serialize};

/// Response body of the upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Where the backend suggests viewing the processed resume.
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Response body of the search endpoint. `results` is only meaningful when
/// `success` is true, and its absence there is a malformed reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Option<Vec<SearchResultRow>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultRow {
    pub resume_id: ResumeId,
    pub score: f64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub section_type: String,
}

/// Resume ids arrive as integers or UUID strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResumeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeId::Number(n) => write!(f, "{n}"),
            ResumeId::Text(s) => f.write_str(s),
        }
    }
}
