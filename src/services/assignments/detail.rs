use tracing::{debug, error};

use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::responses::AssignmentDetailResponse;
use crate::ui::{ModalView, NotificationKind};
use crate::utils::portal_path;

// 整个页面只有一个详情弹窗，所有详情请求共用一个代次
pub(crate) const DETAIL_TARGET: &str = "detail-modal";

const DETAIL_FAILED: &str = "Error fetching assignment details.";
const DETAIL_ERROR: &str = "An error occurred while fetching assignment details.";

pub async fn show_details(service: &AssignmentService, assignment_id: &str) -> Result<ModalView> {
    let ui = service.ui();
    let generation = service.generations().begin(DETAIL_TARGET);
    let path = portal_path(&["assignment", assignment_id]);

    let response = {
        let _loading = ui.loading();
        service.transport().get(&path).await
    };

    if !service.generations().is_current(&generation) {
        debug!(
            "Discarding stale detail response for assignment {}",
            assignment_id
        );
        return Err(PortalError::stale_response(format!(
            "details for {assignment_id} superseded"
        )));
    }

    let result = response
        .and_then(|raw| raw.json::<AssignmentDetailResponse>())
        .and_then(|resp| resp.into_result(DETAIL_FAILED))
        .and_then(|payload| {
            payload
                .assignment
                .ok_or_else(|| PortalError::serialization("response is missing `assignment`"))
        });

    match result {
        Ok(detail) => {
            let view = ModalView::from_detail(&detail);
            ui.state().with_modal_mut(|modal| modal.open(view.clone()));
            ui.host().render_modal(Some(&view));
            Ok(view)
        }
        Err(e) if e.is_transport() => {
            error!("Failed to fetch assignment {}: {}", assignment_id, e);
            ui.notify(NotificationKind::Error, DETAIL_ERROR);
            Err(e)
        }
        Err(e) => {
            ui.notify(NotificationKind::Error, e.message());
            Err(e)
        }
    }
}
