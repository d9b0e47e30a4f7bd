use serde::{Deserialize, Serialize};

/// 应用配置结构体
///
/// 各部分的 `Default` 即内置默认值，加载时作为最底层的配置源。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub portal: PortalConfig,
    pub session: SessionConfig,
    pub analytics: AnalyticsConfig,
    pub notifications: NotificationConfig,
    pub csrf: CsrfConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 门户服务端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub base_url: String,
    pub request_timeout_ms: u64, // 单次请求超时 (毫秒)
    pub user_agent: String,
    #[serde(skip_serializing, default)] // 会话 Cookie 不输出到日志
    pub session_cookie: String,
}

/// 会话轮询配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub endpoint: String,
    pub poll_interval_secs: u64,
    pub redirect_delay_ms: u64,
    pub login_route: String,
}

/// 统计面板配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub endpoint: String,
}

/// 通知展示时间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub show_delay_ms: u64,
    pub display_ms: u64,
    pub fade_ms: u64,
}

/// CSRF 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfConfig {
    pub cookie_name: String,
    pub header_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "HWPortal".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_ms: 30_000,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            session_cookie: String::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: "/check_auth_status".to_string(),
            poll_interval_secs: 5 * 60,
            redirect_delay_ms: 2000,
            login_route: "/authorize".to_string(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint: "/get_analytics_data".to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 100,
            display_ms: 3000,
            fade_ms: 300,
        }
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_string(),
            header_name: "X-CSRFToken".to_string(),
        }
    }
}
