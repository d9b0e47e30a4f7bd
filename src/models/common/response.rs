use serde::{Deserialize, Serialize};

use crate::errors::{PortalError, Result};

// 门户接口统一的响应外壳: { success, message?, ...payload }
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

/// 没有额外字段的响应体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyPayload {}

impl<T> ApiResponse<T> {
    /// 服务端给出的非空提示信息
    pub fn server_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// `success: false` 时转换为 Application 错误，优先使用服务端信息
    pub fn into_result(self, fallback: &str) -> Result<T> {
        if self.success {
            return Ok(self.data);
        }
        let message = self.server_message().unwrap_or(fallback).to_string();
        Err(PortalError::application(message))
    }
}
