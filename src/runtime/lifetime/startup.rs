use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{AccountService, AnalyticsService, AssignmentService, SessionMonitor};
use crate::transport::PortalTransport;
use crate::transport::http::HttpTransport;
use crate::ui::{TracingHost, UiContext, UiHost, UiState};

pub struct StartupContext {
    pub transport: Arc<dyn PortalTransport>,
    pub ui: UiContext,
}

impl StartupContext {
    pub fn assignments(&self) -> AssignmentService {
        AssignmentService::new(self.transport.clone(), self.ui.clone())
    }

    pub fn analytics(&self) -> AnalyticsService {
        AnalyticsService::new(
            self.transport.clone(),
            self.ui.clone(),
            AppConfig::get().analytics.clone(),
        )
    }

    pub fn account(&self) -> AccountService {
        AccountService::new(
            self.transport.clone(),
            self.ui.clone(),
            AppConfig::get().csrf.clone(),
        )
    }

    pub fn session_monitor(&self) -> Result<SessionMonitor> {
        SessionMonitor::new(
            self.transport.clone(),
            self.ui.clone(),
            AppConfig::get().session.clone(),
        )
    }
}

/// 准备客户端启动的上下文
/// 包括 HTTP 传输层、页面状态和界面宿主
pub fn prepare_client_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let transport: Arc<dyn PortalTransport> = Arc::new(HttpTransport::new(&config.portal)?);
    warn!("Portal transport initialized for {}", config.portal.base_url);

    if config.session_cookie().is_none() {
        warn!("No session cookie configured, the portal will treat this client as logged out");
    }

    let state = Arc::new(UiState::new());
    // 无界面运行时卡片由服务端页面提供，这里从空列表挂载
    state.init(Vec::new());

    let host: Arc<dyn UiHost> = Arc::new(TracingHost::new());
    let ui = UiContext::new(state, host, &config.notifications);
    debug!(
        "UI context ready, session poll interval {}s",
        config.session.poll_interval_secs
    );

    Ok(StartupContext { transport, ui })
}
