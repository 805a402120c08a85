//! Recording fakes for the UI ports and a scripted backend.

use std::collections::{BTreeSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::backend::{DashboardBackend, SearchRequest, UploadRequest};
use crate::config::UiTimings;
use crate::errors::DashboardError;
use crate::models::{FileItem, SearchResponse, SearchResultRow, UploadResult};
use crate::ui::{
    Display, Element, FileListView, FilePicker, Notifier, Page, ResultsView, Scheduler,
    ScrollContainer, Task, TimerKind, Toast, ToastHandle, UiContext,
};

#[derive(Default)]
struct ElementState {
    classes: BTreeSet<String>,
    display: Display,
    disabled: bool,
    text: String,
}

#[derive(Default)]
pub struct RecordingElement {
    state: Mutex<ElementState>,
}

impl RecordingElement {
    pub fn with_classes(classes: &[&str]) -> Arc<Self> {
        let element = Self::default();
        for class in classes {
            element.add_class(class);
        }
        Arc::new(element)
    }

    pub fn is_disabled(&self) -> bool {
        self.state.lock().unwrap().disabled
    }

    pub fn text(&self) -> String {
        self.state.lock().unwrap().text.clone()
    }
}

impl Element for RecordingElement {
    fn add_class(&self, class: &str) {
        self.state.lock().unwrap().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state.lock().unwrap().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.lock().unwrap().classes.contains(class)
    }

    fn display(&self) -> Display {
        self.state.lock().unwrap().display
    }

    fn set_display(&self, display: Display) {
        self.state.lock().unwrap().display = display;
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.lock().unwrap().disabled = disabled;
    }

    fn set_text(&self, text: &str) {
        self.state.lock().unwrap().text = text.to_string();
    }
}

#[derive(Default)]
pub struct RecordingFileList {
    renders: Mutex<Vec<Vec<FileItem>>>,
}

impl RecordingFileList {
    pub fn latest(&self) -> Vec<FileItem> {
        self.renders.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }
}

impl FileListView for RecordingFileList {
    fn render(&self, items: &[FileItem]) {
        self.renders.lock().unwrap().push(items.to_vec());
    }
}

#[derive(Default)]
pub struct RecordingPicker {
    pub opens: AtomicUsize,
    pub resets: AtomicUsize,
}

impl FilePicker for RecordingPicker {
    fn open(&self) {
        self.opens.fetch_add(1, Ordering::SeqCst);
    }

    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingResults {
    pub clears: AtomicUsize,
    rows: Mutex<Vec<SearchResultRow>>,
}

impl RecordingResults {
    pub fn rows(&self) -> Vec<SearchResultRow> {
        self.rows.lock().unwrap().clone()
    }
}

impl ResultsView for RecordingResults {
    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().clear();
    }

    fn append(&self, row: &SearchResultRow) {
        self.rows.lock().unwrap().push(row.clone());
    }
}

#[derive(Default)]
pub struct RecordingToast {
    pub fades: AtomicUsize,
    pub removals: AtomicUsize,
}

impl ToastHandle for RecordingToast {
    fn fade(&self) {
        self.fades.fetch_add(1, Ordering::SeqCst);
    }

    fn remove(&self) {
        self.removals.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
    toasts: Mutex<Vec<(Toast, Arc<RecordingToast>)>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }

    pub fn toast_handle(&self, index: usize) -> Arc<RecordingToast> {
        self.toasts.lock().unwrap()[index].1.clone()
    }
}

impl Notifier for RecordingNotifier {
    fn toast(&self, toast: &Toast) -> Arc<dyn ToastHandle> {
        let handle = Arc::new(RecordingToast::default());
        self.toasts
            .lock()
            .unwrap()
            .push((toast.clone(), handle.clone()));
        handle
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub struct RecordingPage {
    pub reloads: AtomicUsize,
    location: String,
    cookies: Option<String>,
}

impl RecordingPage {
    pub fn new(location: &str, cookies: Option<&str>) -> Self {
        Self {
            reloads: AtomicUsize::new(0),
            location: location.to_string(),
            cookies: cookies.map(str::to_string),
        }
    }
}

impl Page for RecordingPage {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn cookies(&self) -> Option<String> {
        self.cookies.clone()
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Collects scheduled tasks instead of running them; tests fire them by hand.
#[derive(Default)]
pub struct ManualScheduler {
    scheduled: Mutex<Vec<(TimerKind, Duration)>>,
    pending: Mutex<VecDeque<Task>>,
}

impl ManualScheduler {
    pub fn kinds(&self) -> Vec<TimerKind> {
        self.scheduled.lock().unwrap().iter().map(|(k, _)| *k).collect()
    }

    pub fn delays_for(&self, kind: TimerKind) -> Vec<Duration> {
        self.scheduled
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, d)| *d)
            .collect()
    }

    /// Runs every pending task, including ones scheduled by tasks it runs.
    pub fn run_all(&self) {
        loop {
            let next = self.pending.lock().unwrap().pop_front();
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, kind: TimerKind, delay: Duration, task: Task) {
        self.scheduled.lock().unwrap().push((kind, delay));
        self.pending.lock().unwrap().push_back(task);
    }
}

pub struct FakeScrollTable {
    pub client_height: f64,
    pub offsets: Vec<f64>,
    pub scroll_top: Mutex<Option<f64>>,
}

impl ScrollContainer for FakeScrollTable {
    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn highlighted_row_offsets(&self) -> Vec<f64> {
        self.offsets.clone()
    }

    fn set_scroll_top(&self, top: f64) {
        *self.scroll_top.lock().unwrap() = Some(top);
    }
}

/// Backend that replays queued replies and records every request.
#[derive(Default)]
pub struct ScriptedBackend {
    upload_replies: Mutex<VecDeque<Result<UploadResult, DashboardError>>>,
    search_replies: Mutex<VecDeque<Result<SearchResponse, DashboardError>>>,
    pub uploads: Mutex<Vec<UploadRequest>>,
    pub searches: Mutex<Vec<SearchRequest>>,
    upload_gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedBackend {
    pub fn reply_upload(&self, reply: Result<UploadResult, DashboardError>) {
        self.upload_replies.lock().unwrap().push_back(reply);
    }

    pub fn reply_search(&self, reply: Result<SearchResponse, DashboardError>) {
        self.search_replies.lock().unwrap().push_back(reply);
    }

    /// Holds every later upload open until the returned gate is notified.
    pub fn hold_uploads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.upload_gate.lock().unwrap() = Some(gate.clone());
        gate
    }
}

#[async_trait]
impl DashboardBackend for ScriptedBackend {
    async fn upload(&self, request: UploadRequest) -> Result<UploadResult, DashboardError> {
        self.uploads.lock().unwrap().push(request);
        let gate = self.upload_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.upload_replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted upload reply")
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, DashboardError> {
        self.searches.lock().unwrap().push(request);
        self.search_replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted search reply")
    }
}

/// Every recording port wired into one context.
pub struct FakeUi {
    pub notifier: Arc<RecordingNotifier>,
    pub page: Arc<RecordingPage>,
    pub scheduler: Arc<ManualScheduler>,
}

impl FakeUi {
    pub fn new() -> Self {
        Self::with_cookies(None)
    }

    pub fn with_cookies(cookies: Option<&str>) -> Self {
        Self {
            notifier: Arc::new(RecordingNotifier::default()),
            page: Arc::new(RecordingPage::new("http://dashboard.test/home/", cookies)),
            scheduler: Arc::new(ManualScheduler::default()),
        }
    }

    pub fn context(&self) -> UiContext {
        UiContext {
            notifier: self.notifier.clone(),
            page: self.page.clone(),
            scheduler: self.scheduler.clone(),
            timings: UiTimings::default(),
        }
    }
}
