//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 客户端的每条失败路径最终都会变成一条通知，这里只负责分类。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    Validation("P001", "Validation Error"),
    Application("P002", "Application Error"),
    Transport("P003", "Transport Error"),
    HttpStatus("P004", "HTTP Status Error"),
    Serialization("P005", "Serialization Error"),
    NotFound("P006", "Resource Not Found"),
    StaleResponse("P007", "Stale Response"),
    Configuration("P008", "Configuration Error"),
}

impl PortalError {
    /// 是否为传输层错误（网络异常、非 2xx、响应体无法解析）
    ///
    /// 这类错误只向用户展示通用提示，详细信息写入日志。
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PortalError::Transport(_) | PortalError::HttpStatus(_) | PortalError::Serialization(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PortalError::Serialization(err.to_string())
        } else if let Some(status) = err.status() {
            PortalError::HttpStatus(status.to_string())
        } else {
            PortalError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for PortalError {
    fn from(err: config::ConfigError) -> Self {
        PortalError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
