pub mod detail;
pub mod filter;
pub mod open;
pub mod submit;

use std::sync::Arc;

pub use filter::{FilterState, SortKey, apply_filters};

use crate::errors::Result;
use crate::models::assignments::entities::{AssignmentCard, SelectedFile};
use crate::transport::PortalTransport;
use crate::ui::{ModalView, UiContext};
use crate::utils::RequestGenerations;

/// 作业列表页的全部交互：过滤排序、详情、提交、打开已提交文件
pub struct AssignmentService {
    transport: Arc<dyn PortalTransport>,
    ui: UiContext,
    generations: Arc<RequestGenerations>,
}

impl AssignmentService {
    pub fn new(transport: Arc<dyn PortalTransport>, ui: UiContext) -> Self {
        Self {
            transport,
            ui,
            generations: Arc::new(RequestGenerations::new()),
        }
    }

    pub(crate) fn transport(&self) -> &dyn PortalTransport {
        self.transport.as_ref()
    }

    pub(crate) fn generations(&self) -> &RequestGenerations {
        &self.generations
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// 过滤并排序卡片，返回可见数量
    pub fn apply_filters(&self, filter: &FilterState) -> usize {
        filter::apply_to_board(self, filter)
    }

    /// 打开作业详情弹窗
    pub async fn show_details(&self, assignment_id: &str) -> Result<ModalView> {
        detail::show_details(self, assignment_id).await
    }

    /// 提交作业文件
    pub async fn submit(
        &self,
        assignment_id: &str,
        file: Option<SelectedFile>,
    ) -> Result<AssignmentCard> {
        submit::submit_assignment(self, assignment_id, file).await
    }

    /// 打开已提交的文件
    pub async fn open_submission(&self, assignment_id: &str) -> Result<String> {
        open::open_submission(self, assignment_id).await
    }
}
