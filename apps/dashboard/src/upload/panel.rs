use std::sync::Arc;
use std::time::Duration;

use crate::ui::{Display, Element, Scheduler, TimerKind, COLLAPSE_CLASS, SHOW_CLASS};

/// How the panel is shown and hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// The element carries the `collapse` class; visibility is the `show` class.
    Collapse,
    /// Visibility is the inline display style, with `show` driving the fade.
    Display,
}

/// The collapsible upload section.
pub struct UploadPanel {
    element: Option<Arc<dyn Element>>,
    scheduler: Arc<dyn Scheduler>,
    fade: Duration,
}

impl UploadPanel {
    pub fn new(element: Option<Arc<dyn Element>>, scheduler: Arc<dyn Scheduler>, fade: Duration) -> Self {
        Self {
            element,
            scheduler,
            fade,
        }
    }

    pub fn mode(&self) -> Option<PanelMode> {
        self.element.as_ref().map(|el| {
            if el.has_class(COLLAPSE_CLASS) {
                PanelMode::Collapse
            } else {
                PanelMode::Display
            }
        })
    }

    pub fn toggle(&self) {
        let Some(element) = &self.element else {
            return;
        };
        match self.mode() {
            Some(PanelMode::Collapse) => element.add_class(SHOW_CLASS),
            Some(PanelMode::Display) => match element.display() {
                Display::None | Display::Unset => {
                    element.set_display(Display::Block);
                    element.add_class(SHOW_CLASS);
                }
                Display::Block => self.close(),
            },
            None => {}
        }
    }

    /// Hides the panel. In display mode the element stays laid out until the
    /// fade transition has had time to finish.
    pub fn close(&self) {
        let Some(element) = &self.element else {
            return;
        };
        element.remove_class(SHOW_CLASS);
        if self.mode() == Some(PanelMode::Display) {
            let element = element.clone();
            self.scheduler.schedule(
                TimerKind::PanelFade,
                self.fade,
                Box::new(move || element.set_display(Display::None)),
            );
        }
    }
}
