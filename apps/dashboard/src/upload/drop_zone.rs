use std::sync::Arc;

use tracing::debug;

use crate::models::FileHandle;
use crate::ui::{Element, DRAG_OVER_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DragOver,
}

/// Drag events delivered to the drop zone. All of them suppress the
/// browser's default file-open behaviour.
#[derive(Debug, Clone)]
pub enum DropZoneEvent {
    DragOver,
    DragLeave,
    Drop(Vec<FileHandle>),
}

/// Where a click on the drop zone came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Zone,
    /// A button nested in the zone that opens the picker itself.
    NestedButton,
}

/// Drag highlight state of the drop zone.
pub struct DropZone {
    element: Option<Arc<dyn Element>>,
    state: DragState,
}

impl DropZone {
    pub fn new(element: Option<Arc<dyn Element>>) -> Self {
        Self {
            element,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Applies the event and hands back any dropped files.
    pub fn handle(&mut self, event: DropZoneEvent) -> Option<Vec<FileHandle>> {
        let (next, dropped) = match event {
            DropZoneEvent::DragOver => (DragState::DragOver, None),
            DropZoneEvent::DragLeave => (DragState::Idle, None),
            DropZoneEvent::Drop(files) => (DragState::Idle, Some(files)),
        };

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "drop zone transition");
            self.state = next;
        }
        if let Some(element) = &self.element {
            element.toggle_class(DRAG_OVER_CLASS, next == DragState::DragOver);
        }
        dropped
    }
}
