use tracing::{debug, error};

use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::responses::OpenAssignmentResponse;
use crate::ui::NotificationKind;
use crate::utils::portal_path;

const OPEN_FAILED: &str = "Error opening assignment.";
const OPEN_ERROR: &str = "An error occurred while opening the assignment.";

/// 卡片上的 "Open" 操作：获取已提交文件的地址并交给宿主打开
pub async fn open_submission(service: &AssignmentService, assignment_id: &str) -> Result<String> {
    let ui = service.ui();
    let generation = service
        .generations()
        .begin(format!("open:{assignment_id}"));
    let path = portal_path(&["open_assignment", assignment_id]);

    let response = {
        let _loading = ui.loading();
        service.transport().get(&path).await
    };

    if !service.generations().is_current(&generation) {
        debug!("Discarding stale open response for assignment {}", assignment_id);
        return Err(PortalError::stale_response(format!(
            "open for {assignment_id} superseded"
        )));
    }

    let result = response
        .and_then(|raw| raw.json::<OpenAssignmentResponse>())
        .and_then(|resp| resp.into_result(OPEN_FAILED))
        .and_then(|payload| {
            payload
                .file_url
                .filter(|url| !url.is_empty())
                .ok_or_else(|| PortalError::application(OPEN_FAILED))
        });

    match result {
        Ok(url) => {
            ui.host().open_url(&url);
            Ok(url)
        }
        Err(e) if e.is_transport() => {
            error!("Failed to open assignment {}: {}", assignment_id, e);
            ui.notify(NotificationKind::Error, OPEN_ERROR);
            Err(e)
        }
        Err(e) => {
            ui.notify(NotificationKind::Error, e.message());
            Err(e)
        }
    }
}
