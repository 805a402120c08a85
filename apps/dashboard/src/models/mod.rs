pub mod file;
pub mod payloads;

pub use file::{FileHandle, FileId, FileItem};
pub use payloads::{ResumeId, SearchResponse, SearchResultRow, UploadResult};
