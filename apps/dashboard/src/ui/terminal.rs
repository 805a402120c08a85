//! Terminal rendering of the UI ports, used by the `dashboard` binary.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::Notify;
use tracing::{debug, info};

use super::{
    Display, Element, FileListView, FilePicker, Notifier, Page, ResultsView, Toast, ToastHandle,
};
use crate::models::{FileItem, SearchResultRow};

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    display: Display,
    disabled: bool,
    text: String,
}

/// An element that only keeps state and logs changes.
pub struct TerminalElement {
    label: &'static str,
    state: Mutex<ElementState>,
}

impl TerminalElement {
    pub fn new(label: &'static str) -> Arc<Self> {
        Arc::new(Self {
            label,
            state: Mutex::new(ElementState::default()),
        })
    }

    fn state(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Element for TerminalElement {
    fn add_class(&self, class: &str) {
        if self.state().classes.insert(class.to_string()) {
            debug!(element = self.label, class, "class added");
        }
    }

    fn remove_class(&self, class: &str) {
        if self.state().classes.remove(class) {
            debug!(element = self.label, class, "class removed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.state().classes.contains(class)
    }

    fn display(&self) -> Display {
        self.state().display
    }

    fn set_display(&self, display: Display) {
        self.state().display = display;
    }

    fn set_disabled(&self, disabled: bool) {
        self.state().disabled = disabled;
        debug!(element = self.label, disabled, "disabled state changed");
    }

    fn set_text(&self, text: &str) {
        self.state().text = text.to_string();
        println!("{text}");
    }
}

pub struct TerminalFileList;

impl FileListView for TerminalFileList {
    fn render(&self, items: &[FileItem]) {
        if items.is_empty() {
            println!("No files staged.");
            return;
        }
        println!("Staged files:");
        for item in items {
            println!("  {} ({})", item.name, item.size_label);
        }
    }
}

/// There is no native chooser in a terminal; files come from the command line.
pub struct TerminalPicker;

impl FilePicker for TerminalPicker {
    fn open(&self) {
        info!("Pass files on the command line: dashboard upload <FILES>...");
    }

    fn reset(&self) {
        debug!("file selection cleared");
    }
}

pub struct TerminalResults;

impl ResultsView for TerminalResults {
    fn clear(&self) {}

    fn append(&self, row: &SearchResultRow) {
        println!("Resume ID: {}", row.resume_id);
        println!("  Score:   {}", row.score);
        println!("  Content: {}", row.content);
        println!("  Section: {}", row.section_type);
    }
}

struct TerminalToast;

impl ToastHandle for TerminalToast {
    fn fade(&self) {}

    fn remove(&self) {}
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn toast(&self, toast: &Toast) -> Arc<dyn ToastHandle> {
        println!("{} {}", toast.title, toast.message);
        Arc::new(TerminalToast)
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// The "page" is the remote dashboard; a reload is a signal the caller can
/// wait on.
pub struct TerminalPage {
    location: String,
    cookies: Option<String>,
    reloaded: Notify,
}

impl TerminalPage {
    pub fn new(location: String, cookies: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            location,
            cookies,
            reloaded: Notify::new(),
        })
    }

    pub async fn reloaded(&self) {
        self.reloaded.notified().await;
    }
}

impl Page for TerminalPage {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn cookies(&self) -> Option<String> {
        self.cookies.clone()
    }

    fn reload(&self) {
        info!("Dashboard refreshed: {}", self.location);
        self.reloaded.notify_one();
    }
}
