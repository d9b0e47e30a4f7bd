//! 界面层
//!
//! `UiState` 保存页面状态，`UiHost` 负责对外的副作用（显示通知、
//! 加载指示器、跳转、绘制弹窗和图表）。服务层通过 `UiContext` 同时持有两者。

pub mod analytics;
pub mod board;
pub mod modal;
pub mod notification;
#[cfg(test)]
pub mod recording;
pub mod state;
pub mod tracing_host;

use std::sync::Arc;

pub use analytics::{AnalyticsPanel, AnalyticsView};
pub use board::CardBoard;
pub use modal::{ClickTarget, CloseTrigger, DetailModal, ModalView};
pub use notification::{Notification, NotificationKind, NotificationTimeline};
pub use state::{Theme, UiState};
pub use tracing_host::TracingHost;

use crate::config::NotificationConfig;
use crate::models::assignments::entities::AssignmentCard;

pub trait UiHost: Send + Sync {
    // 显示或隐藏共享的加载指示器
    fn set_loading(&self, visible: bool);
    // 展示一条通知
    fn notify(&self, notification: &Notification);
    // 跳转到另一个页面
    fn navigate(&self, route: &str);
    // 在新窗口打开文件
    fn open_url(&self, _url: &str) {}
    // 重新绘制详情弹窗，None 表示关闭
    fn render_modal(&self, _view: Option<&ModalView>) {}
    // 重新绘制单张卡片
    fn render_card(&self, _card: &AssignmentCard) {}
    // 按顺序重新排列可见卡片
    fn render_board(&self, _visible: &[&AssignmentCard]) {}
    // 重新绘制统计面板
    fn render_analytics(&self, _panel: &AnalyticsPanel) {}
}

#[derive(Clone)]
pub struct UiContext {
    state: Arc<UiState>,
    host: Arc<dyn UiHost>,
    timeline: NotificationTimeline,
}

impl UiContext {
    pub fn new(state: Arc<UiState>, host: Arc<dyn UiHost>, config: &NotificationConfig) -> Self {
        Self {
            state,
            host,
            timeline: NotificationTimeline::from(config),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn host(&self) -> &dyn UiHost {
        self.host.as_ref()
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification::new(kind, message, self.timeline);
        self.host.notify(&notification);
    }

    pub fn navigate(&self, route: &str) {
        tracing::warn!("Navigating to {}", route);
        self.host.navigate(route);
    }

    /// 显示加载指示器，守卫释放时隐藏
    pub fn loading(&self) -> LoadingGuard {
        if self.state.begin_loading() {
            self.host.set_loading(true);
        }
        LoadingGuard { ui: self.clone() }
    }

    /// 关闭详情弹窗，三种触发方式都走这里
    pub fn close_modal(&self, trigger: CloseTrigger) -> bool {
        let closed = self.state.with_modal_mut(|m| m.close(trigger));
        self.modal_closed(closed)
    }

    pub fn click_modal(&self, target: ClickTarget) -> bool {
        let closed = self.state.with_modal_mut(|m| m.click(target));
        self.modal_closed(closed)
    }

    pub fn modal_key_down(&self, key: &str) -> bool {
        let closed = self.state.with_modal_mut(|m| m.key_down(key));
        self.modal_closed(closed)
    }

    fn modal_closed(&self, closed: bool) -> bool {
        if closed {
            self.host.render_modal(None);
        }
        closed
    }
}

/// 加载指示器守卫，成功和失败分支都会在 drop 时隐藏指示器
pub struct LoadingGuard {
    ui: UiContext,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.ui.state.end_loading() {
            self.ui.host.set_loading(false);
        }
    }
}
