//! 门户 HTTP 接口的传输层
//!
//! 服务层只依赖 `PortalTransport`，生产环境使用基于 reqwest 的实现。

use serde::de::DeserializeOwned;

use crate::errors::{PortalError, Result};
use crate::models::assignments::entities::SelectedFile;

pub mod http;
#[cfg(test)]
pub mod scripted;

pub use http::HttpTransport;

/// 原始响应：状态码 + 响应体文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(value: serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 非 2xx 视为传输失败，否则按 JSON 解析响应体
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.is_success() {
            return Err(PortalError::http_status(format!(
                "unexpected status {}",
                self.status
            )));
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// multipart 表单
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub text_fields: Vec<(String, String)>,
    pub files: Vec<(String, SelectedFile)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text_fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: SelectedFile) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.text_fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[async_trait::async_trait]
pub trait PortalTransport: Send + Sync {
    // GET 请求
    async fn get(&self, path: &str) -> Result<RawResponse>;
    // 带自定义请求头的 JSON POST 请求
    async fn post_json(
        &self,
        path: &str,
        headers: &[(String, String)],
        body: serde_json::Value,
    ) -> Result<RawResponse>;
    // multipart POST 请求
    async fn post_multipart(&self, path: &str, form: MultipartForm) -> Result<RawResponse>;
    // 读取当前会话中的 Cookie
    fn cookie(&self, name: &str) -> Option<String>;
}
