use serde::{Deserialize, Serialize};

/// 单门课程的统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAnalytics {
    pub course_name: String,
    #[serde(default)]
    pub total_assignments: u64,
    #[serde(default)]
    pub submitted_assignments: u64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub average_grade: f64,
}

/// GET /get_analytics_data
///
/// 出错时服务端只返回 `{ "error": "..." }`，所以其余字段都有默认值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    #[serde(default)]
    pub total_courses: u64,
    #[serde(default)]
    pub total_assignments: u64,
    #[serde(default)]
    pub overall_completion_rate: f64,
    #[serde(default)]
    pub average_grade: f64,
    // 日期标签 -> 提交数，保持服务端给出的顺序
    #[serde(default)]
    pub submission_timeline: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub course_analytics: Vec<CourseAnalytics>,
    // A, B, C, D, F
    #[serde(default)]
    pub grade_distribution: Vec<u64>,
    // 周一到周日
    #[serde(default)]
    pub workload_distribution: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
