use serde::{Deserialize, Serialize};

/// GET /check_auth_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
}
