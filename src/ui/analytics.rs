//! 统计面板的视图模型
//!
//! 图表本身由宿主绘制，这里只准备好标签和数据。

use crate::models::analytics::responses::{AnalyticsData, CourseAnalytics};

const GRADE_LABELS: [&str; 5] = ["A", "B", "C", "D", "F"];
const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewFigures {
    pub total_courses: String,
    pub total_assignments: String,
    pub completion_rate: String,
    pub average_grade: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub course_name: String,
    pub total_assignments: u64,
    pub submitted_assignments: u64,
    pub completion_rate: String,
    pub average_grade: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Radar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub id: &'static str,
    pub kind: ChartKind,
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub y_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub overview: OverviewFigures,
    pub course_rows: Vec<CourseRow>,
    pub charts: Vec<ChartSeries>,
}

impl AnalyticsView {
    pub fn from_data(data: &AnalyticsData) -> Self {
        let overview = OverviewFigures {
            total_courses: data.total_courses.to_string(),
            total_assignments: data.total_assignments.to_string(),
            completion_rate: format!("{:.2}%", data.overall_completion_rate),
            average_grade: format!("{:.2}", data.average_grade),
        };

        // 表格默认按完成率降序
        let mut courses: Vec<&CourseAnalytics> = data.course_analytics.iter().collect();
        courses.sort_by(|a, b| b.completion_rate.total_cmp(&a.completion_rate));
        let course_rows = courses
            .into_iter()
            .map(|course| CourseRow {
                course_name: course.course_name.clone(),
                total_assignments: course.total_assignments,
                submitted_assignments: course.submitted_assignments,
                completion_rate: format!("{:.2}%", course.completion_rate),
                average_grade: format!("{:.2}", course.average_grade),
            })
            .collect();

        let charts = vec![
            ChartSeries {
                id: "submissionChart",
                kind: ChartKind::Line,
                label: "Submissions".to_string(),
                labels: data.submission_timeline.keys().cloned().collect(),
                values: data
                    .submission_timeline
                    .values()
                    .map(|v| v.as_f64().unwrap_or(0.0))
                    .collect(),
                y_max: None,
            },
            ChartSeries {
                id: "completionChart",
                kind: ChartKind::Bar,
                label: "Completion Rate (%)".to_string(),
                labels: data
                    .course_analytics
                    .iter()
                    .map(|c| c.course_name.clone())
                    .collect(),
                values: data
                    .course_analytics
                    .iter()
                    .map(|c| c.completion_rate)
                    .collect(),
                y_max: Some(100.0),
            },
            ChartSeries {
                id: "gradeDistributionChart",
                kind: ChartKind::Pie,
                label: "Grade Distribution".to_string(),
                labels: GRADE_LABELS.iter().map(|s| s.to_string()).collect(),
                values: data.grade_distribution.iter().map(|&v| v as f64).collect(),
                y_max: None,
            },
            ChartSeries {
                id: "workloadDistributionChart",
                kind: ChartKind::Radar,
                label: "Assignment Due Dates".to_string(),
                labels: WEEKDAY_LABELS.iter().map(|s| s.to_string()).collect(),
                values: data
                    .workload_distribution
                    .iter()
                    .map(|&v| v as f64)
                    .collect(),
                y_max: None,
            },
        ];

        Self {
            overview,
            course_rows,
            charts,
        }
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSeries> {
        self.charts.iter().find(|c| c.id == id)
    }
}

/// 统计面板状态
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalyticsPanel {
    #[default]
    Idle,
    Loading,
    Ready(AnalyticsView),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, rate: f64) -> CourseAnalytics {
        CourseAnalytics {
            course_name: name.to_string(),
            total_assignments: 4,
            submitted_assignments: 3,
            completion_rate: rate,
            average_grade: 81.234,
        }
    }

    #[test]
    fn test_overview_formatting() {
        let data = AnalyticsData {
            total_courses: 3,
            total_assignments: 12,
            overall_completion_rate: 83.3333,
            average_grade: 87.5,
            ..Default::default()
        };
        let view = AnalyticsView::from_data(&data);
        assert_eq!(view.overview.total_courses, "3");
        assert_eq!(view.overview.completion_rate, "83.33%");
        assert_eq!(view.overview.average_grade, "87.50");
    }

    #[test]
    fn test_course_rows_sorted_by_completion_desc() {
        let data = AnalyticsData {
            course_analytics: vec![course("Lit", 50.0), course("Math", 75.0), course("Art", 50.0)],
            ..Default::default()
        };
        let view = AnalyticsView::from_data(&data);
        let names: Vec<_> = view.course_rows.iter().map(|r| r.course_name.as_str()).collect();
        assert_eq!(names, vec!["Math", "Lit", "Art"]);
        assert_eq!(view.course_rows[0].completion_rate, "75.00%");
        assert_eq!(view.course_rows[0].average_grade, "81.23");

        // 柱状图保持服务端顺序
        let bar = view.chart("completionChart").unwrap();
        assert_eq!(bar.labels, vec!["Lit", "Math", "Art"]);
        assert_eq!(bar.y_max, Some(100.0));
    }

    #[test]
    fn test_timeline_chart() {
        let data: AnalyticsData = serde_json::from_str(
            r#"{
                "submission_timeline": {"2024-10-01": 2, "2024-10-02": 5},
                "workload_distribution": [1, 0, 2, 0, 3, 0, 0]
            }"#,
        )
        .unwrap();
        let view = AnalyticsView::from_data(&data);
        let line = view.chart("submissionChart").unwrap();
        assert_eq!(line.labels, vec!["2024-10-01", "2024-10-02"]);
        assert_eq!(line.values, vec![2.0, 5.0]);
        let radar = view.chart("workloadDistributionChart").unwrap();
        assert_eq!(radar.labels.len(), 7);
        assert_eq!(radar.kind, ChartKind::Radar);
    }

    #[test]
    fn test_timeline_keeps_server_order() {
        let data: AnalyticsData = serde_json::from_str(
            r#"{"submission_timeline": {"Sep 30": 1, "Oct 01": 2, "Oct 02": 3}}"#,
        )
        .unwrap();
        let view = AnalyticsView::from_data(&data);
        let line = view.chart("submissionChart").unwrap();
        assert_eq!(line.labels, vec!["Sep 30", "Oct 01", "Oct 02"]);
        assert_eq!(line.values, vec![1.0, 2.0, 3.0]);
    }
}
