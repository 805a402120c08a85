use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use tracing::{debug, warn};

use super::csrf::{CSRF_FIELD, CSRF_HEADER};
use super::{DashboardBackend, SearchRequest, UploadRequest, UPLOAD_FIELD};
use crate::config::Config;
use crate::errors::DashboardError;
use crate::models::{SearchResponse, UploadResult};

const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Talks to the dashboard backend over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    search_path: String,
    cookie: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self, DashboardError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| DashboardError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.http_timeout_secs))
                .build()?,
            base_url,
            search_path: config.search_path.clone(),
            cookie: config.cookie.clone(),
        })
    }

    /// Resolves an absolute URL or a path against the base URL.
    fn resolve(&self, target: &str) -> Result<Url, DashboardError> {
        self.base_url
            .join(target)
            .map_err(|e| DashboardError::InvalidUrl(format!("{target}: {e}")))
    }

    fn with_session(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.cookie {
            Some(cookie) => builder.header(reqwest::header::COOKIE, cookie),
            None => builder,
        }
    }
}

#[async_trait]
impl DashboardBackend for HttpBackend {
    async fn upload(&self, request: UploadRequest) -> Result<UploadResult, DashboardError> {
        let url = self.resolve(&request.action)?;

        let mut form = Form::new();
        for file in &request.files {
            let data = file.read().await?;
            let mut part = Part::bytes(data.to_vec()).file_name(file.name().to_string());
            if !file.mime().is_empty() {
                part = part.mime_str(file.mime())?;
            }
            form = form.part(UPLOAD_FIELD, part);
        }
        if let Some(token) = &request.csrf_token {
            form = form.text(CSRF_FIELD, token.clone());
        }

        debug!("Uploading {} file(s) to {}", request.files.len(), url);

        let response = self
            .with_session(self.client.post(url))
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upload endpoint returned {}: {}", status, body);
            return Err(DashboardError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<UploadResult>().await?)
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, DashboardError> {
        let url = self.resolve(&self.search_path)?;

        let mut builder = self.with_session(self.client.post(url)).form(&request.fields);
        if let Some(token) = &request.csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        // The status is not checked: error pages fail to parse and surface
        // as a generic search failure.
        let response = builder.send().await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
