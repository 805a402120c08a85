use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::DashboardBackend;
use crate::errors::DashboardError;
use crate::search::{SearchBindings, SearchWidget};
use crate::ui::UiContext;
use crate::upload::{UploadBindings, UploadWidget};

/// Everything a page offers to the widgets.
#[derive(Clone, Default)]
pub struct DashboardBindings {
    pub upload: UploadBindings,
    pub search: SearchBindings,
}

/// Owns the dashboard widgets and builds them exactly once.
#[derive(Default)]
pub struct DashboardHost {
    initialized: bool,
    upload: Option<UploadWidget>,
    search: Option<SearchWidget>,
}

impl DashboardHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs the widgets. A widget whose required bindings are absent is
    /// skipped with a warning; calling this twice is an error.
    pub fn bootstrap(
        &mut self,
        ctx: UiContext,
        bindings: DashboardBindings,
        backend: Arc<dyn DashboardBackend>,
    ) -> Result<(), DashboardError> {
        if self.initialized {
            return Err(DashboardError::AlreadyInitialized);
        }
        self.initialized = true;

        self.upload = Some(UploadWidget::new(
            ctx.clone(),
            bindings.upload,
            backend.clone(),
        ));

        match SearchWidget::new(ctx, bindings.search, backend) {
            Ok(widget) => self.search = Some(widget),
            Err(e) => warn!("Search widget skipped: {e}"),
        }

        info!(
            "Dashboard ready (upload: {}, search: {})",
            self.upload.is_some(),
            self.search.is_some()
        );
        Ok(())
    }

    pub fn upload(&self) -> Option<&UploadWidget> {
        self.upload.as_ref()
    }

    pub fn search(&self) -> Option<&SearchWidget> {
        self.search.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeUi, RecordingResults, ScriptedBackend};
    use crate::ui::StaticForm;

    #[test]
    fn test_bootstrap_builds_both_widgets() {
        let ui = FakeUi::new();
        let mut host = DashboardHost::new();
        let bindings = DashboardBindings {
            upload: UploadBindings::default(),
            search: SearchBindings {
                form: Some(Arc::new(StaticForm::default())),
                results: Some(Arc::new(RecordingResults::default())),
            },
        };

        host.bootstrap(ui.context(), bindings, Arc::new(ScriptedBackend::default()))
            .unwrap();

        assert!(host.upload().is_some());
        assert!(host.search().is_some());
    }

    #[test]
    fn test_missing_search_bindings_skip_search_only() {
        let ui = FakeUi::new();
        let mut host = DashboardHost::new();

        host.bootstrap(
            ui.context(),
            DashboardBindings::default(),
            Arc::new(ScriptedBackend::default()),
        )
        .unwrap();

        assert!(host.upload().is_some());
        assert!(host.search().is_none());
    }

    #[test]
    fn test_second_bootstrap_is_rejected() {
        let ui = FakeUi::new();
        let backend = Arc::new(ScriptedBackend::default());
        let mut host = DashboardHost::new();

        host.bootstrap(ui.context(), DashboardBindings::default(), backend.clone())
            .unwrap();
        let err = host
            .bootstrap(ui.context(), DashboardBindings::default(), backend)
            .unwrap_err();

        assert!(matches!(err, DashboardError::AlreadyInitialized));
    }
}
