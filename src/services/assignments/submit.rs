use tracing::{debug, error, info, warn};

use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::entities::{AssignmentCard, AssignmentStatus, SelectedFile};
use crate::models::assignments::responses::SubmissionResponse;
use crate::transport::MultipartForm;
use crate::ui::NotificationKind;
use crate::utils::validate_selected_file;

const SUBMIT_PATH: &str = "/submit_assignment";
const SUBMIT_SUCCEEDED: &str = "Assignment submitted successfully!";
const SUBMIT_FAILED: &str = "Error submitting assignment. Please try again.";
const SUBMIT_ERROR: &str = "An error occurred. Please try again.";

/// 上传作业文件，成功后原地更新对应卡片
///
/// 只有服务端确认成功后才修改卡片状态，失败不会自动重试。
pub async fn submit_assignment(
    service: &AssignmentService,
    assignment_id: &str,
    file: Option<SelectedFile>,
) -> Result<AssignmentCard> {
    let ui = service.ui();

    let file = match validate_selected_file(file.as_ref()) {
        Ok(file) => file.clone(),
        Err(message) => {
            ui.notify(NotificationKind::Error, message);
            return Err(PortalError::validation(message));
        }
    };

    let generation = service
        .generations()
        .begin(format!("submit:{assignment_id}"));
    let form = MultipartForm::new()
        .file("file", file)
        .text("assignment_id", assignment_id);

    let response = {
        let _loading = ui.loading();
        service.transport().post_multipart(SUBMIT_PATH, form).await
    };

    if !service.generations().is_current(&generation) {
        debug!(
            "Discarding stale submission response for assignment {}",
            assignment_id
        );
        return Err(PortalError::stale_response(format!(
            "submission for {assignment_id} superseded"
        )));
    }

    let result = response
        .and_then(|raw| raw.json::<SubmissionResponse>())
        .and_then(|resp| resp.into_result(SUBMIT_FAILED));

    let payload = match result {
        Ok(payload) => payload,
        Err(e) if e.is_transport() => {
            error!("Failed to submit assignment {}: {}", assignment_id, e);
            ui.notify(NotificationKind::Error, SUBMIT_ERROR);
            return Err(e);
        }
        Err(e) => {
            ui.notify(NotificationKind::Error, e.message());
            return Err(e);
        }
    };

    info!("Assignment {} submitted", assignment_id);
    ui.notify(NotificationKind::Success, SUBMIT_SUCCEEDED);

    let target_id = payload
        .assignment_id
        .unwrap_or_else(|| assignment_id.to_string());
    let updated = ui.state().with_board_mut(|board| {
        board
            .set_status(&target_id, AssignmentStatus::Submitted)
            .cloned()
    });

    match updated {
        Some(card) => {
            ui.host().render_card(&card);
            Ok(card)
        }
        None => {
            warn!("Submitted assignment {} has no card on this page", target_id);
            Err(PortalError::not_found(format!("card {target_id}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::sync::Arc;

    use super::*;
    use crate::config::NotificationConfig;
    use crate::models::assignments::entities::CardActions;
    use crate::transport::RawResponse;
    use crate::transport::scripted::ScriptedTransport;
    use crate::ui::recording::{HostEvent, RecordingHost};
    use crate::ui::{UiContext, UiState};

    fn setup(status: AssignmentStatus) -> (AssignmentService, Arc<ScriptedTransport>, Arc<RecordingHost>) {
        let transport = Arc::new(ScriptedTransport::new());
        let host = Arc::new(RecordingHost::default());
        let state = Arc::new(UiState::new());
        state.init(vec![
            AssignmentCard::new("12", "Lab 3", "Chem", status, "2024-11-01T09:00:00"),
            AssignmentCard::new("13", "Lab 4", "Chem", AssignmentStatus::NotSubmitted, ""),
        ]);
        let ui = UiContext::new(state, host.clone(), &NotificationConfig::default());
        (
            AssignmentService::new(transport.clone(), ui),
            transport,
            host,
        )
    }

    fn pdf() -> SelectedFile {
        SelectedFile::new("lab3.pdf", b"%PDF-1.7".to_vec()).with_content_type("application/pdf")
    }

    fn card(service: &AssignmentService, id: &str) -> AssignmentCard {
        service
            .ui()
            .state()
            .with_board(|b| b.get(id).cloned())
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_never_hits_network() {
        let (service, transport, host) = setup(AssignmentStatus::NotSubmitted);

        let err = service.submit("12", None).await.unwrap_err();
        assert_eq!(err.code(), "P001");
        assert_eq!(transport.call_count(), 0);
        assert_eq!(
            host.events(),
            vec![HostEvent::Notify(
                NotificationKind::Error,
                "Please select a file to upload.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_success_marks_card_submitted() {
        for prior in [AssignmentStatus::NotSubmitted, AssignmentStatus::Graded] {
            let (service, transport, host) = setup(prior);
            transport.respond_json(
                "POST",
                SUBMIT_PATH,
                json!({"success": true, "assignment_id": 12}),
            );

            let updated = service.submit("12", Some(pdf())).await.unwrap();
            assert_eq!(updated.status, AssignmentStatus::Submitted);
            assert_eq!(updated.actions(), CardActions::OpenSubmission);
            assert_eq!(card(&service, "12").status, AssignmentStatus::Submitted);
            assert_eq!(
                host.notifications(),
                vec![(NotificationKind::Success, SUBMIT_SUCCEEDED.to_string())]
            );

            let calls = transport.calls();
            let form = calls[0].form.as_ref().unwrap();
            assert_eq!(form.text_field("assignment_id"), Some("12"));
            assert_eq!(form.files[0].0, "file");
            assert_eq!(form.files[0].1.file_name, "lab3.pdf");
        }
    }

    #[tokio::test]
    async fn test_success_without_assignment_id_uses_local_id() {
        let (service, transport, _host) = setup(AssignmentStatus::NotSubmitted);
        transport.respond_json("POST", SUBMIT_PATH, json!({"success": true}));
        let updated = service.submit("12", Some(pdf())).await.unwrap();
        assert_eq!(updated.id, "12");
    }

    #[tokio::test]
    async fn test_server_rejection_leaves_card_unchanged() {
        let (service, transport, host) = setup(AssignmentStatus::NotSubmitted);
        transport.respond_json(
            "POST",
            SUBMIT_PATH,
            json!({"success": false, "message": "Deadline has passed"}),
        );

        let err = service.submit("12", Some(pdf())).await.unwrap_err();
        assert_eq!(err.code(), "P002");
        let card = card(&service, "12");
        assert_eq!(card.status, AssignmentStatus::NotSubmitted);
        assert_eq!(card.actions(), CardActions::SubmitForm);
        assert_eq!(
            host.notifications(),
            vec![(NotificationKind::Error, "Deadline has passed".to_string())]
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_not_retried() {
        let (service, transport, host) = setup(AssignmentStatus::NotSubmitted);
        transport.respond(
            "POST",
            SUBMIT_PATH,
            Err(PortalError::transport("connection refused")),
        );

        service.submit("12", Some(pdf())).await.unwrap_err();
        assert_eq!(transport.call_count(), 1);
        assert_eq!(card(&service, "12").status, AssignmentStatus::NotSubmitted);
        assert_eq!(
            host.notifications(),
            vec![(NotificationKind::Error, SUBMIT_ERROR.to_string())]
        );
        assert_eq!(service.ui().state().loading_count(), 0);
    }

    #[tokio::test]
    async fn test_non_success_status_is_generic_failure() {
        let (service, transport, host) = setup(AssignmentStatus::NotSubmitted);
        transport.respond(
            "POST",
            SUBMIT_PATH,
            Ok(RawResponse::new(413, r#"{"success":false,"message":"too big"}"#)),
        );
        service.submit("12", Some(pdf())).await.unwrap_err();
        assert_eq!(
            host.notifications(),
            vec![(NotificationKind::Error, SUBMIT_ERROR.to_string())]
        );
    }

    #[tokio::test]
    async fn test_submissions_for_different_cards_do_not_interfere() {
        let (service, transport, _host) = setup(AssignmentStatus::NotSubmitted);
        transport.respond_json("POST", SUBMIT_PATH, json!({"success": true, "assignment_id": "12"}));
        transport.respond_json("POST", SUBMIT_PATH, json!({"success": true, "assignment_id": "13"}));

        let (a, b) = tokio::join!(
            service.submit("12", Some(pdf())),
            service.submit("13", Some(pdf()))
        );
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(card(&service, "13").status, AssignmentStatus::Submitted);
    }
}
