use reqwest::cookie::{CookieStore, Jar};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::{MultipartForm, PortalTransport, RawResponse};
use crate::config::PortalConfig;
use crate::errors::{PortalError, Result};
use crate::utils::cookie_value;

pub struct HttpTransport {
    client: Client,
    base_url: Url,
    jar: Arc<Jar>,
}

impl HttpTransport {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PortalError::configuration(format!("invalid portal.base_url: {e}")))?;

        let jar = Arc::new(Jar::default());
        if !config.session_cookie.is_empty() {
            for cookie in config.session_cookie.split(';') {
                let cookie = cookie.trim();
                if !cookie.is_empty() {
                    jar.add_cookie_str(cookie, &base_url);
                }
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .cookie_provider(jar.clone())
            .build()?;

        debug!("HttpTransport initialized for {}", base_url);
        Ok(Self {
            client,
            base_url,
            jar,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PortalError::configuration(format!("invalid path {path}: {e}")))
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait::async_trait]
impl PortalTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        let url = self.url(path)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn post_json(
        &self,
        path: &str,
        headers: &[(String, String)],
        body: serde_json::Value,
    ) -> Result<RawResponse> {
        let url = self.url(path)?;
        debug!("POST {}", url);
        let mut request = self.client.post(url).json(&body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send().await?;
        Self::read(response).await
    }

    async fn post_multipart(&self, path: &str, form: MultipartForm) -> Result<RawResponse> {
        let url = self.url(path)?;
        debug!("POST (multipart) {}", url);

        let mut multipart = Form::new();
        for (name, file) in form.files {
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(content_type) = file.content_type.as_deref() {
                part = part.mime_str(content_type)?;
            }
            multipart = multipart.part(name, part);
        }
        for (name, value) in form.text_fields {
            multipart = multipart.text(name, value);
        }

        let response = self.client.post(url).multipart(multipart).send().await?;
        Self::read(response).await
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let header = header.to_str().ok()?;
        cookie_value(header, name)
    }
}
