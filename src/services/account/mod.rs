use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

use crate::config::CsrfConfig;
use crate::errors::Result;
use crate::models::common::response::{ApiResponse, EmptyPayload};
use crate::transport::PortalTransport;
use crate::ui::{NotificationKind, UiContext};

const DELETE_PATH: &str = "/delete_account";
const LOGOUT_ROUTE: &str = "/logout";
const LOGOUT_DELAY: Duration = Duration::from_millis(2000);
const DELETE_SUCCEEDED: &str = "Account deleted successfully. Redirecting...";
const DELETE_FAILED: &str = "Error deleting account. Please try again.";
const DELETE_ERROR: &str = "An error occurred. Please try again.";

pub struct AccountService {
    transport: Arc<dyn PortalTransport>,
    ui: UiContext,
    csrf: CsrfConfig,
}

impl AccountService {
    pub fn new(transport: Arc<dyn PortalTransport>, ui: UiContext, csrf: CsrfConfig) -> Self {
        Self {
            transport,
            ui,
            csrf,
        }
    }

    /// 删除账号，成功后跳转到登出页
    ///
    /// 确认对话框由调用方负责，这里直接发请求。
    pub async fn delete_account(&self) -> Result<()> {
        let mut headers = Vec::new();
        match self.transport.cookie(&self.csrf.cookie_name) {
            Some(token) => headers.push((self.csrf.header_name.clone(), token)),
            None => warn!(
                "CSRF cookie '{}' not found, sending request without token",
                self.csrf.cookie_name
            ),
        }

        let response = {
            let _loading = self.ui.loading();
            self.transport
                .post_json(DELETE_PATH, &headers, serde_json::json!({}))
                .await
        };

        let result = response
            .and_then(|raw| raw.json::<ApiResponse<EmptyPayload>>())
            .and_then(|resp| resp.into_result(DELETE_FAILED));

        match result {
            Ok(_) => {
                self.ui.notify(NotificationKind::Success, DELETE_SUCCEEDED);
                tokio::time::sleep(LOGOUT_DELAY).await;
                self.ui.navigate(LOGOUT_ROUTE);
                Ok(())
            }
            Err(e) if e.is_transport() => {
                error!("Failed to delete account: {}", e);
                self.ui.notify(NotificationKind::Error, DELETE_ERROR);
                Err(e)
            }
            Err(e) => {
                self.ui.notify(NotificationKind::Error, e.message());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::NotificationConfig;
    use crate::transport::scripted::ScriptedTransport;
    use crate::ui::recording::RecordingHost;
    use crate::ui::UiState;

    fn setup() -> (AccountService, Arc<ScriptedTransport>, Arc<RecordingHost>) {
        let transport = Arc::new(ScriptedTransport::new());
        let host = Arc::new(RecordingHost::default());
        let ui = UiContext::new(
            Arc::new(UiState::new()),
            host.clone(),
            &NotificationConfig::default(),
        );
        let service = AccountService::new(transport.clone(), ui, CsrfConfig::default());
        (service, transport, host)
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_sends_csrf_header_and_logs_out() {
        let (service, transport, host) = setup();
        transport.set_cookie("csrftoken", "tok-42");
        transport.respond_json("POST", DELETE_PATH, json!({"success": true}));

        service.delete_account().await.unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls[0].headers,
            vec![("X-CSRFToken".to_string(), "tok-42".to_string())]
        );
        assert_eq!(host.navigations(), vec![LOGOUT_ROUTE.to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_delete_does_not_navigate() {
        let (service, transport, host) = setup();
        transport.respond_json(
            "POST",
            DELETE_PATH,
            json!({"success": false, "message": "Invalid CSRF token"}),
        );

        service.delete_account().await.unwrap_err();
        assert!(host.navigations().is_empty());
        assert_eq!(
            host.notifications(),
            vec![(NotificationKind::Error, "Invalid CSRF token".to_string())]
        );
    }
}
