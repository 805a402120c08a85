#![allow(dead_code)]

//! UI binding ports.
//!
//! Widgets never reach for a global document. Everything they touch on
//! screen is handed to them as one of these trait objects, so the same
//! widget logic drives the terminal front end and the recording fakes used
//! in tests.

use std::sync::Arc;

use crate::config::UiTimings;
use crate::models::{FileItem, SearchResultRow};

pub mod form;
pub mod scheduler;
pub mod terminal;

pub use form::StaticForm;
pub use scheduler::{Scheduler, Task, TimerKind, TokioScheduler};

pub const SHOW_CLASS: &str = "show";
pub const HIDDEN_CLASS: &str = "d-none";
pub const COLLAPSE_CLASS: &str = "collapse";
pub const DRAG_OVER_CLASS: &str = "drag-over";

/// Inline `display` style of an element. `Unset` means no inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Unset,
    None,
    Block,
}

/// A generic on-screen element: class list, display style, disabled state
/// and text content. Implementations use interior mutability.
pub trait Element: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn display(&self) -> Display;
    fn set_display(&self, display: Display);
    fn set_disabled(&self, disabled: bool);
    fn set_text(&self, text: &str);

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Container listing the pending files.
pub trait FileListView: Send + Sync {
    /// Replaces the whole list with `items`.
    fn render(&self, items: &[FileItem]);
}

/// The native file chooser.
pub trait FilePicker: Send + Sync {
    fn open(&self);
    /// Clears the chooser's current selection.
    fn reset(&self);
}

/// A form whose fields are serialized on submit.
pub trait FormSource: Send + Sync {
    /// The form's `action` attribute, if set.
    fn action(&self) -> Option<String>;
    fn fields(&self) -> Vec<(String, String)>;
}

/// Container for search result blocks.
pub trait ResultsView: Send + Sync {
    fn clear(&self);
    fn append(&self, row: &SearchResultRow);
}

/// A scrollable table whose highlighted rows mark fresh uploads.
pub trait ScrollContainer: Send + Sync {
    fn client_height(&self) -> f64;
    /// Top offsets of highlighted rows, in document order.
    fn highlighted_row_offsets(&self) -> Vec<f64>;
    fn set_scroll_top(&self, top: f64);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            title: "Success!".to_string(),
            message: message.into(),
        }
    }
}

/// A toast already on screen.
pub trait ToastHandle: Send + Sync {
    /// Starts the fade-out transition.
    fn fade(&self);
    fn remove(&self);
}

pub trait Notifier: Send + Sync {
    fn toast(&self, toast: &Toast) -> Arc<dyn ToastHandle>;
    /// Blocking error dialog.
    fn alert(&self, message: &str);
}

/// The hosting page.
pub trait Page: Send + Sync {
    /// Current page URL, used when a form has no action.
    fn location(&self) -> String;
    /// Raw cookie string visible to the page.
    fn cookies(&self) -> Option<String>;
    fn reload(&self);
}

/// Ports shared by every widget on a page.
#[derive(Clone)]
pub struct UiContext {
    pub notifier: Arc<dyn Notifier>,
    pub page: Arc<dyn Page>,
    pub scheduler: Arc<dyn Scheduler>,
    pub timings: UiTimings,
}
