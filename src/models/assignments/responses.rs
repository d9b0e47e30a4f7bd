use serde::{Deserialize, Serialize};

use super::entities::{AssignmentDetail, optional_string_or_number};
use crate::models::common::response::ApiResponse;

/// GET /assignment/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentDetailPayload {
    #[serde(default)]
    pub assignment: Option<AssignmentDetail>,
}

/// POST /submit_assignment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub assignment_id: Option<String>,
}

/// GET /open_assignment/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAssignmentPayload {
    #[serde(default)]
    pub file_url: Option<String>,
}

pub type AssignmentDetailResponse = ApiResponse<AssignmentDetailPayload>;
pub type SubmissionResponse = ApiResponse<SubmissionPayload>;
pub type OpenAssignmentResponse = ApiResponse<OpenAssignmentPayload>;
