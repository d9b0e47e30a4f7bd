//! 页面级 UI 状态
//!
//! 取代脚本里散落的全局变量：卡片列表、详情弹窗、统计面板、主题和
//! 加载指示器计数都集中在这里，由调用方显式创建、初始化和销毁。

use std::sync::RwLock;

use super::analytics::AnalyticsPanel;
use super::board::CardBoard;
use super::modal::DetailModal;
use crate::models::assignments::entities::AssignmentCard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Default)]
struct UiStateInner {
    board: CardBoard,
    modal: DetailModal,
    analytics: AnalyticsPanel,
    theme: Theme,
    loading: usize,
    mounted: bool,
}

#[derive(Debug, Default)]
pub struct UiState {
    inner: RwLock<UiStateInner>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 挂载页面：载入服务端渲染的卡片
    pub fn init(&self, cards: Vec<AssignmentCard>) {
        let mut inner = self.inner.write().expect("UI state lock poisoned");
        inner.board = CardBoard::new(cards);
        inner.mounted = true;
    }

    /// 卸载页面，清空所有状态
    pub fn teardown(&self) {
        let mut inner = self.inner.write().expect("UI state lock poisoned");
        *inner = UiStateInner::default();
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.read().expect("UI state lock poisoned").mounted
    }

    pub fn with_board<R>(&self, f: impl FnOnce(&CardBoard) -> R) -> R {
        f(&self.inner.read().expect("UI state lock poisoned").board)
    }

    pub fn with_board_mut<R>(&self, f: impl FnOnce(&mut CardBoard) -> R) -> R {
        f(&mut self.inner.write().expect("UI state lock poisoned").board)
    }

    pub fn with_modal<R>(&self, f: impl FnOnce(&DetailModal) -> R) -> R {
        f(&self.inner.read().expect("UI state lock poisoned").modal)
    }

    pub fn with_modal_mut<R>(&self, f: impl FnOnce(&mut DetailModal) -> R) -> R {
        f(&mut self.inner.write().expect("UI state lock poisoned").modal)
    }

    pub fn analytics(&self) -> AnalyticsPanel {
        self.inner
            .read()
            .expect("UI state lock poisoned")
            .analytics
            .clone()
    }

    pub fn set_analytics(&self, panel: AnalyticsPanel) {
        self.inner.write().expect("UI state lock poisoned").analytics = panel;
    }

    pub fn theme(&self) -> Theme {
        self.inner.read().expect("UI state lock poisoned").theme
    }

    /// 切换主题并返回新主题
    pub fn toggle_theme(&self) -> Theme {
        let mut inner = self.inner.write().expect("UI state lock poisoned");
        inner.theme = inner.theme.toggled();
        inner.theme
    }

    pub fn loading_count(&self) -> usize {
        self.inner.read().expect("UI state lock poisoned").loading
    }

    /// 返回 true 表示指示器需要从隐藏变为显示
    pub(crate) fn begin_loading(&self) -> bool {
        let mut inner = self.inner.write().expect("UI state lock poisoned");
        inner.loading += 1;
        inner.loading == 1
    }

    /// 返回 true 表示最后一个请求结束，指示器需要隐藏
    pub(crate) fn end_loading(&self) -> bool {
        let mut inner = self.inner.write().expect("UI state lock poisoned");
        inner.loading = inner.loading.saturating_sub(1);
        inner.loading == 0
    }
}
