use std::sync::Arc;
use tracing::{error, info};

use crate::config::AnalyticsConfig;
use crate::errors::{PortalError, Result};
use crate::models::analytics::responses::AnalyticsData;
use crate::transport::PortalTransport;
use crate::ui::{AnalyticsPanel, AnalyticsView, NotificationKind, UiContext};

const ANALYTICS_ERROR: &str = "Failed to load analytics. Please try again later.";

/// 统计面板：概览数字、课程表格和四个图表
pub struct AnalyticsService {
    transport: Arc<dyn PortalTransport>,
    ui: UiContext,
    config: AnalyticsConfig,
}

impl AnalyticsService {
    pub fn new(transport: Arc<dyn PortalTransport>, ui: UiContext, config: AnalyticsConfig) -> Self {
        Self {
            transport,
            ui,
            config,
        }
    }

    /// 加载统计数据并刷新面板
    pub async fn load(&self) -> Result<AnalyticsView> {
        self.set_panel(AnalyticsPanel::Loading);

        let response = {
            let _loading = self.ui.loading();
            self.transport.get(&self.config.endpoint).await
        };

        let data = match response.and_then(|raw| raw.json::<AnalyticsData>()) {
            Ok(data) => data,
            Err(e) => {
                error!("Error fetching analytics data: {}", e);
                self.fail(ANALYTICS_ERROR);
                return Err(e);
            }
        };

        if let Some(message) = data.error.as_deref().filter(|m| !m.is_empty()) {
            self.fail(message);
            return Err(PortalError::application(message));
        }

        let view = AnalyticsView::from_data(&data);
        info!(
            "Analytics loaded: {} course(s), {} assignment(s)",
            data.total_courses, data.total_assignments
        );
        self.set_panel(AnalyticsPanel::Ready(view.clone()));
        Ok(view)
    }

    fn fail(&self, message: &str) {
        self.ui.notify(NotificationKind::Error, message);
        self.set_panel(AnalyticsPanel::Failed(message.to_string()));
    }

    fn set_panel(&self, panel: AnalyticsPanel) {
        self.ui.host().render_analytics(&panel);
        self.ui.state().set_analytics(panel);
    }
}
