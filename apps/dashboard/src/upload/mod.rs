#![allow(dead_code)]

//! Upload widget. Stages resume files and posts them as one multipart form.
//!
//! Flow: files arrive from drag-and-drop or the picker → filtered by the
//! allow-list → staged in a `PendingFileSet` → `submit()` posts them with
//! the anti-forgery token → on success the page reloads after a short delay.

pub mod drop_zone;
pub mod panel;
pub mod pending;
pub mod table;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::backend::csrf::token_field;
use crate::backend::{DashboardBackend, UploadRequest};
use crate::cooldown::Cooldown;
use crate::errors::DashboardError;
use crate::models::{FileHandle, FileId, UploadResult};
use crate::ui::{
    Element, FileListView, FilePicker, FormSource, ScrollContainer, TimerKind, Toast, UiContext,
    HIDDEN_CLASS,
};

pub use drop_zone::{ClickOrigin, DragState, DropZone, DropZoneEvent};
pub use panel::{PanelMode, UploadPanel};
pub use pending::PendingFileSet;

const PROGRESS_TEXT: &str = "Uploading...";
const DEFAULT_SUCCESS_MESSAGE: &str = "Upload complete";
const DEFAULT_FAILURE_MESSAGE: &str = "Upload failed";

/// Elements the upload widget can drive. Every binding is optional; a
/// missing element turns the matching behaviour into a no-op.
#[derive(Clone, Default)]
pub struct UploadBindings {
    pub panel: Option<Arc<dyn Element>>,
    pub drop_zone: Option<Arc<dyn Element>>,
    pub file_picker: Option<Arc<dyn FilePicker>>,
    pub file_list: Option<Arc<dyn FileListView>>,
    pub submit_button: Option<Arc<dyn Element>>,
    pub form: Option<Arc<dyn FormSource>>,
    pub progress: Option<Arc<dyn Element>>,
    pub progress_text: Option<Arc<dyn Element>>,
    pub uploads_table: Option<Arc<dyn ScrollContainer>>,
}

/// State touched by the event handlers. Never locked across an await, so
/// handlers keep running while an upload is in flight.
struct UploadState {
    pending: PendingFileSet,
    drop_zone: DropZone,
    picker_guard: Cooldown,
}

pub struct UploadWidget {
    ctx: UiContext,
    bindings: UploadBindings,
    backend: Arc<dyn DashboardBackend>,
    panel: UploadPanel,
    state: Mutex<UploadState>,
}

impl UploadWidget {
    pub fn new(
        ctx: UiContext,
        bindings: UploadBindings,
        backend: Arc<dyn DashboardBackend>,
    ) -> Self {
        let drop_zone = DropZone::new(bindings.drop_zone.clone());
        let panel = UploadPanel::new(
            bindings.panel.clone(),
            ctx.scheduler.clone(),
            ctx.timings.panel_fade,
        );
        let picker_guard = Cooldown::new(ctx.timings.picker_cooldown);

        if let Some(uploads) = &bindings.uploads_table {
            if let Some(top) = table::centre_first_highlighted(uploads.as_ref()) {
                debug!(top, "uploads table scrolled to newest upload");
            }
        }

        Self {
            ctx,
            bindings,
            backend,
            panel,
            state: Mutex::new(UploadState {
                pending: PendingFileSet::new(),
                drop_zone,
                picker_guard,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, UploadState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the staged files.
    pub fn pending(&self) -> PendingFileSet {
        self.state().pending.clone()
    }

    pub fn drag_state(&self) -> DragState {
        self.state().drop_zone.state()
    }

    /// Stages every allow-listed candidate and re-renders the list.
    /// Returns how many new files were staged.
    pub fn add_files(&self, candidates: impl IntoIterator<Item = FileHandle>) -> usize {
        let accepted: Vec<FileHandle> = candidates
            .into_iter()
            .filter(|file| {
                let ok = file.is_accepted();
                if !ok {
                    warn!(
                        "Skipping {} ({}): only PDF, DOC and DOCX files are accepted",
                        file.name(),
                        if file.mime().is_empty() { "unknown type" } else { file.mime() }
                    );
                }
                ok
            })
            .collect();

        let added = {
            let mut state = self.state();
            accepted
                .into_iter()
                .filter(|file| state.pending.insert(file.clone()))
                .count()
        };
        self.render();
        added
    }

    pub fn remove_file(&self, id: FileId) {
        let removed = self.state().pending.remove(id);
        if removed.is_some() {
            debug!(?id, "file removed from upload list");
        }
        self.render();
    }

    /// Clears the staged files and the picker, and closes the panel.
    pub fn reset(&self) {
        self.state().pending.clear();
        self.render();
        if let Some(picker) = &self.bindings.file_picker {
            picker.reset();
        }
        self.panel.close();
    }

    pub fn handle_drop_zone(&self, event: DropZoneEvent) {
        let dropped = self.state().drop_zone.handle(event);
        if let Some(files) = dropped {
            self.add_files(files);
        }
    }

    /// Files chosen through the picker.
    pub fn handle_file_selected(&self, files: Vec<FileHandle>) {
        self.add_files(files);
    }

    /// Opens the picker for a click on the drop zone. Clicks from the nested
    /// button are left to the button, and repeats inside the cooldown window
    /// are dropped. Returns whether the picker was opened.
    pub fn handle_drop_zone_click(&self, origin: ClickOrigin) -> bool {
        let Some(picker) = self.bindings.file_picker.clone() else {
            return false;
        };
        if origin == ClickOrigin::NestedButton {
            return false;
        }
        let opened = self.state().picker_guard.try_fire(|| picker.open());
        if !opened {
            debug!("file picker already opening; click ignored");
        }
        opened
    }

    pub fn toggle_panel(&self) {
        self.panel.toggle();
    }

    pub fn close_panel(&self) {
        self.panel.close();
    }

    /// Posts every staged file. Returns `Ok(None)` when nothing is staged.
    ///
    /// The files are snapshotted before the request goes out; handlers may
    /// keep staging or removing files while it is in flight. A successful
    /// upload clears the whole set, late additions included.
    ///
    /// Failures are alerted through the notifier and returned. The submit
    /// control and progress indicator are restored on every exit path,
    /// including when the future is dropped mid-flight.
    pub async fn submit(&self) -> Result<Option<UploadResult>, DashboardError> {
        let files: Vec<FileHandle> = self.state().pending.iter().cloned().collect();
        if files.is_empty() {
            debug!("submit ignored: no files staged");
            return Ok(None);
        }

        let request = UploadRequest {
            action: self.action(),
            files,
            csrf_token: self.csrf_token(),
        };
        info!("Uploading {} resume(s) to {}", request.files.len(), request.action);

        let _progress = ProgressGuard::start(&self.bindings);

        match self.send(request).await {
            Ok(result) => {
                self.complete(&result);
                Ok(Some(result))
            }
            Err(e) => {
                warn!("Upload failed: {e}");
                self.ctx
                    .notifier
                    .alert(&format!("Error uploading files: {}", e.upload_message()));
                Err(e)
            }
        }
    }

    async fn send(&self, request: UploadRequest) -> Result<UploadResult, DashboardError> {
        let result = self.backend.upload(request).await?;
        if !result.success {
            let message = result
                .error
                .clone()
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            return Err(DashboardError::Rejected(message));
        }
        Ok(result)
    }

    fn complete(&self, result: &UploadResult) {
        let message = result
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
        info!("Upload succeeded: {message}");
        if let Some(url) = &result.redirect_url {
            debug!("Backend suggested {url}");
        }

        self.show_success(message);
        self.reset();

        let page = self.ctx.page.clone();
        self.ctx.scheduler.schedule(
            TimerKind::PageReload,
            self.ctx.timings.page_reload,
            Box::new(move || page.reload()),
        );
    }

    fn show_success(&self, message: String) {
        let toast = self.ctx.notifier.toast(&Toast::success(message));
        let scheduler = self.ctx.scheduler.clone();
        let fade = self.ctx.timings.toast_fade;
        self.ctx.scheduler.schedule(
            TimerKind::ToastFade,
            self.ctx.timings.toast_visible,
            Box::new(move || {
                toast.fade();
                scheduler.schedule(TimerKind::ToastRemove, fade, Box::new(move || toast.remove()));
            }),
        );
    }

    fn render(&self) {
        let items = self.state().pending.items();
        if let Some(list) = &self.bindings.file_list {
            list.render(&items);
        }
        if let Some(button) = &self.bindings.submit_button {
            button.toggle_class(HIDDEN_CLASS, items.is_empty());
        }
    }

    /// The form's action, falling back to the current page.
    fn action(&self) -> String {
        self.bindings
            .form
            .as_ref()
            .and_then(|f| f.action())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| self.ctx.page.location())
    }

    fn csrf_token(&self) -> Option<String> {
        self.bindings
            .form
            .as_ref()
            .and_then(|f| token_field(&f.fields()))
    }
}

/// Disables the submit control and shows the progress indicator until dropped.
struct ProgressGuard {
    button: Option<Arc<dyn Element>>,
    progress: Option<Arc<dyn Element>>,
}

impl ProgressGuard {
    fn start(bindings: &UploadBindings) -> Self {
        if let Some(progress) = &bindings.progress {
            progress.remove_class(HIDDEN_CLASS);
        }
        if let Some(button) = &bindings.submit_button {
            button.set_disabled(true);
        }
        if let Some(text) = &bindings.progress_text {
            text.set_text(PROGRESS_TEXT);
        }
        Self {
            button: bindings.submit_button.clone(),
            progress: bindings.progress.clone(),
        }
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        if let Some(button) = &self.button {
            button.set_disabled(false);
        }
        if let Some(progress) = &self.progress {
            progress.add_class(HIDDEN_CLASS);
        }
    }
}
