use std::collections::HashSet;

use crate::models::{FileHandle, FileId, FileItem};

/// Files staged for upload, in the order they were added. Holds each
/// handle identity at most once.
#[derive(Debug, Clone, Default)]
pub struct PendingFileSet {
    files: Vec<FileHandle>,
    ids: HashSet<FileId>,
}

impl PendingFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the handle was already staged.
    pub fn insert(&mut self, file: FileHandle) -> bool {
        if !self.ids.insert(file.id()) {
            return false;
        }
        self.files.push(file);
        true
    }

    pub fn remove(&mut self, id: FileId) -> Option<FileHandle> {
        if !self.ids.remove(&id) {
            return None;
        }
        let index = self.files.iter().position(|f| f.id() == id)?;
        Some(self.files.remove(index))
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileHandle> {
        self.files.iter()
    }

    pub fn items(&self) -> Vec<FileItem> {
        self.files.iter().map(FileItem::from).collect()
    }
}
