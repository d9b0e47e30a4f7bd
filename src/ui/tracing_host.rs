use tracing::{debug, error, info, warn};

use super::{AnalyticsPanel, ModalView, Notification, NotificationKind, UiHost};
use crate::models::assignments::entities::AssignmentCard;

/// 无界面环境下的宿主：所有界面变化都写入日志
#[derive(Debug, Default)]
pub struct TracingHost;

impl TracingHost {
    pub fn new() -> Self {
        Self
    }
}

// 通知在日志中的一行，例如 `[warning] Your session has expired. (3000 ms)`
fn notification_line(notification: &Notification) -> String {
    format!(
        "[{}] {} ({} ms)",
        notification.kind.as_str(),
        notification.message,
        notification.timeline.hide_after.as_millis()
    )
}

impl UiHost for TracingHost {
    fn set_loading(&self, visible: bool) {
        debug!("Loading indicator {}", if visible { "shown" } else { "hidden" });
    }

    fn notify(&self, notification: &Notification) {
        let line = notification_line(notification);
        match notification.kind {
            NotificationKind::Error => error!(id = %notification.id, "{}", line),
            NotificationKind::Warning => warn!(id = %notification.id, "{}", line),
            NotificationKind::Success | NotificationKind::Info => {
                info!(id = %notification.id, "{}", line)
            }
        }
    }

    fn navigate(&self, route: &str) {
        warn!("Redirecting to {}", route);
    }

    fn open_url(&self, url: &str) {
        info!("Opening {}", url);
    }

    fn render_modal(&self, view: Option<&ModalView>) {
        match view {
            Some(view) => {
                info!("Assignment details: {}", view.title);
                for line in view.lines() {
                    info!("  {}", line);
                }
            }
            None => debug!("Assignment details closed"),
        }
    }

    fn render_card(&self, card: &AssignmentCard) {
        info!(
            "Assignment {} ({}) is now {}",
            card.title, card.course, card.status
        );
    }

    fn render_board(&self, visible: &[&AssignmentCard]) {
        debug!("Board shows {} assignment(s)", visible.len());
        for card in visible {
            debug!("  [{}] {} - {}", card.status.label(), card.title, card.course);
        }
    }

    fn render_analytics(&self, panel: &AnalyticsPanel) {
        match panel {
            AnalyticsPanel::Idle => {}
            AnalyticsPanel::Loading => debug!("Loading analytics..."),
            AnalyticsPanel::Failed(message) => error!("Analytics unavailable: {}", message),
            AnalyticsPanel::Ready(view) => {
                info!(
                    "Courses: {} | Assignments: {} | Completion: {} | Average grade: {}",
                    view.overview.total_courses,
                    view.overview.total_assignments,
                    view.overview.completion_rate,
                    view.overview.average_grade
                );
                for row in &view.course_rows {
                    info!(
                        "  {:<24} {:>3}/{:<3} {:>8} {:>8}",
                        row.course_name,
                        row.submitted_assignments,
                        row.total_assignments,
                        row.completion_rate,
                        row.average_grade
                    );
                }
            }
        }
    }
}
