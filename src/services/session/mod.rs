//! 会话监控
//!
//! 启动时立即检查一次登录状态，之后按固定间隔轮询。会话失效时提示用户，
//! 延迟片刻后跳转到登录页；网络异常只记录日志，不会强制登出。

use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, warn};

use crate::config::SessionConfig;
use crate::errors::{PortalError, Result};
use crate::models::session::AuthStatus;
use crate::transport::PortalTransport;
use crate::ui::{NotificationKind, UiContext};

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    Authenticated,
    /// 已提示并跳转到登录页
    Expired,
    /// 检查失败，按仍然登录处理
    Unknown,
}

pub struct SessionMonitor {
    transport: Arc<dyn PortalTransport>,
    ui: UiContext,
    config: SessionConfig,
}

impl SessionMonitor {
    /// 轮询间隔必须大于 0
    pub fn new(
        transport: Arc<dyn PortalTransport>,
        ui: UiContext,
        config: SessionConfig,
    ) -> Result<Self> {
        if config.poll_interval_secs == 0 {
            return Err(PortalError::configuration(
                "session.poll_interval_secs must be greater than 0",
            ));
        }
        Ok(Self {
            transport,
            ui,
            config,
        })
    }

    /// 执行一次检查
    pub async fn check_once(&self) -> SessionCheck {
        let status = self
            .transport
            .get(&self.config.endpoint)
            .await
            .and_then(|raw| raw.json::<AuthStatus>());

        match status {
            Ok(status) if status.authenticated => {
                debug!("Session is still authenticated");
                SessionCheck::Authenticated
            }
            Ok(_) => {
                warn!("Session is no longer authenticated");
                self.ui.notify(NotificationKind::Warning, SESSION_EXPIRED);
                tokio::time::sleep(Duration::from_millis(self.config.redirect_delay_ms)).await;
                self.ui.navigate(&self.config.login_route);
                SessionCheck::Expired
            }
            Err(e) => {
                error!("Error checking auth status: {}", e);
                SessionCheck::Unknown
            }
        }
    }

    /// 持续轮询，直到会话失效并完成跳转
    pub async fn run(&self) {
        let mut interval =
            tokio::time::interval(Duration::from_secs(self.config.poll_interval_secs));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if self.check_once().await == SessionCheck::Expired {
                // 跳转后页面已离开，停止轮询
                break;
            }
        }
    }
}
