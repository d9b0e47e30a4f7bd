use std::time::Duration;
use uuid::Uuid;

use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// 通知元素的样式类
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// 通知从出现到移除的时间线（相对创建时刻）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimeline {
    pub show_after: Duration,
    pub hide_after: Duration,
    pub remove_after: Duration,
}

impl From<&NotificationConfig> for NotificationTimeline {
    fn from(config: &NotificationConfig) -> Self {
        let hide_after = Duration::from_millis(config.display_ms);
        Self {
            show_after: Duration::from_millis(config.show_delay_ms),
            hide_after,
            remove_after: hide_after + Duration::from_millis(config.fade_ms),
        }
    }
}

/// 非阻塞的提示消息
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub timeline: NotificationTimeline,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, timeline: NotificationTimeline) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_from_config() {
        let timeline = NotificationTimeline::from(&NotificationConfig::default());
        assert_eq!(timeline.show_after, Duration::from_millis(100));
        assert_eq!(timeline.hide_after, Duration::from_millis(3000));
        assert_eq!(timeline.remove_after, Duration::from_millis(3300));
    }
}
