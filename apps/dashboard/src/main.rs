mod backend;
mod config;
mod cooldown;
mod errors;
mod host;
mod models;
mod search;
mod ui;
mod upload;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::csrf::CSRF_FIELD;
use crate::backend::HttpBackend;
use crate::config::Config;
use crate::host::{DashboardBindings, DashboardHost};
use crate::models::{FileHandle, SearchResultRow};
use crate::search::SearchBindings;
use crate::ui::terminal::{
    TerminalElement, TerminalFileList, TerminalNotifier, TerminalPage, TerminalPicker,
    TerminalResults,
};
use crate::ui::{StaticForm, TokioScheduler, UiContext};
use crate::upload::UploadBindings;

const DEFAULT_SEARCH_TYPE: &str = "full_text";

#[derive(Parser)]
#[command(name = "dashboard", version, about = "Upload and search resumes on the dashboard backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload PDF, DOC or DOCX resumes
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Search uploaded resumes
    Search {
        query: String,
        /// Section to search; repeat to re-run the search for each type
        #[arg(long = "search-type", default_value = DEFAULT_SEARCH_TYPE)]
        search_types: Vec<String>,
        /// Extra form field, repeatable
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume dashboard client v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(HttpBackend::new(&config)?);
    let page = TerminalPage::new(
        format!("{}{}", config.base_url.trim_end_matches('/'), config.upload_path),
        config.cookie.clone(),
    );
    let ctx = UiContext {
        notifier: Arc::new(TerminalNotifier),
        page: page.clone(),
        scheduler: Arc::new(TokioScheduler),
        timings: config.timings,
    };

    let mut host = DashboardHost::new();

    match cli.command {
        Command::Upload { files } => {
            let mut form = StaticForm::new(Some(config.upload_path.clone()));
            if let Some(token) = &config.csrf_token {
                form = form.field(CSRF_FIELD, token.clone());
            }
            let bindings = DashboardBindings {
                upload: UploadBindings {
                    file_picker: Some(Arc::new(TerminalPicker)),
                    file_list: Some(Arc::new(TerminalFileList)),
                    submit_button: Some(TerminalElement::new("uploadButton")),
                    form: Some(Arc::new(form)),
                    progress: Some(TerminalElement::new("uploadProgress")),
                    progress_text: Some(TerminalElement::new("progressText")),
                    ..Default::default()
                },
                search: SearchBindings::default(),
            };
            host.bootstrap(ctx, bindings, backend)?;
            let widget = host.upload().context("upload widget unavailable")?;

            let mut handles = Vec::with_capacity(files.len());
            for path in &files {
                match FileHandle::from_path(path).await {
                    Ok(handle) => handles.push(handle),
                    Err(e) => warn!("Cannot read {}: {e}", path.display()),
                }
            }
            widget.handle_file_selected(handles);
            if widget.pending().is_empty() {
                bail!("no PDF, DOC or DOCX files to upload");
            }

            widget.submit().await.context("upload did not complete")?;

            // Give the scheduled refresh a chance to run before exiting.
            let grace = config.timings.page_reload + Duration::from_millis(500);
            if tokio::time::timeout(grace, page.reloaded()).await.is_err() {
                warn!("Dashboard refresh did not run before exit");
            }
        }
        Command::Search {
            query,
            search_types,
            fields,
        } => {
            let mut search_types = search_types.into_iter();
            let first = search_types
                .next()
                .unwrap_or_else(|| DEFAULT_SEARCH_TYPE.to_string());
            let mut form = StaticForm::new(None)
                .field("query", query)
                .field("search_type", first);
            for (name, value) in fields {
                form = form.field(name, value);
            }
            let form = Arc::new(form);
            let bindings = DashboardBindings {
                upload: UploadBindings::default(),
                search: SearchBindings {
                    form: Some(form.clone()),
                    results: Some(Arc::new(TerminalResults)),
                },
            };
            host.bootstrap(ctx, bindings, backend)?;
            let widget = host.search().context("search widget unavailable")?;

            let rows = widget.submit().await.context("search did not complete")?;
            report_empty(&rows);

            for search_type in search_types {
                println!("Search type: {search_type}");
                form.set_field("search_type", search_type);
                let rows = widget
                    .handle_search_type_changed()
                    .await
                    .context("search did not complete")?;
                report_empty(&rows);
            }
        }
    }

    Ok(())
}

fn report_empty(rows: &[SearchResultRow]) {
    if rows.is_empty() {
        println!("No matching resumes.");
    }
}
