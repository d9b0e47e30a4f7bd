use crate::models::assignments::entities::{AssignmentDetail, AssignmentStatus};
use crate::utils::format_due_date;

const NO_DESCRIPTION: &str = "No description available";

/// 详情弹窗中展示的内容
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub assignment_id: Option<String>,
    pub title: String,
    pub course: String,
    pub due_date: String,
    pub status: String,
    pub description: String,
    pub attachment_url: Option<String>,
    pub grade_line: Option<String>,
    pub feedback: Option<String>,
}

impl ModalView {
    pub fn from_detail(detail: &AssignmentDetail) -> Self {
        // 只有已评分的作业显示成绩
        let grade_line = (detail.status == AssignmentStatus::Graded).then(|| {
            let grade = detail
                .grade
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |g| g.to_string());
            let total = detail
                .total_marks
                .as_ref()
                .map_or_else(|| "N/A".to_string(), |t| t.to_string());
            format!("{grade} / {total}")
        });

        Self {
            assignment_id: detail.id.clone(),
            title: detail.title.clone(),
            course: detail.course.clone(),
            due_date: format_due_date(&detail.due_date),
            status: detail.status.label().to_string(),
            description: detail
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            attachment_url: detail.file_url.clone().filter(|u| !u.is_empty()),
            grade_line,
            feedback: detail.feedback.clone().filter(|f| !f.trim().is_empty()),
        }
    }

    /// 标题下方逐行展示的字段
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Course: {}", self.course),
            format!("Due Date: {}", self.due_date),
            format!("Status: {}", self.status),
            format!("Description: {}", self.description),
        ];
        if let Some(url) = &self.attachment_url {
            lines.push(format!("Attached File: {url}"));
        }
        if let Some(grade) = &self.grade_line {
            lines.push(format!("Grade: {grade}"));
        }
        if let Some(feedback) = &self.feedback {
            lines.push(format!("Feedback: {feedback}"));
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// 弹窗上的点击位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

/// 详情弹窗，整个页面只有这一个
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    view: Option<ModalView>,
}

impl DetailModal {
    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    /// 打开弹窗，已打开时替换其内容
    pub fn open(&mut self, view: ModalView) {
        self.view = Some(view);
    }

    /// 关闭弹窗，返回之前是否处于打开状态
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_open = self.view.take().is_some();
        if was_open {
            tracing::debug!("Detail modal closed by {:?}", trigger);
        }
        was_open
    }

    /// 只有点在内容框外的遮罩上才关闭
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(CloseTrigger::Backdrop),
            ClickTarget::Content => false,
        }
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.close(CloseTrigger::Escape)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::Score;

    fn detail(status: AssignmentStatus) -> AssignmentDetail {
        AssignmentDetail {
            id: Some("9".into()),
            title: "Essay 1".into(),
            course: "Lit".into(),
            status,
            due_date: "2024-10-05T23:59:00".into(),
            description: None,
            grade: Some(Score::Number(18.0)),
            total_marks: Some(Score::Number(20.0)),
            feedback: Some("Well argued".into()),
            file_url: None,
        }
    }

    #[test]
    fn test_graded_shows_grade_line() {
        let view = ModalView::from_detail(&detail(AssignmentStatus::Graded));
        assert_eq!(view.grade_line.as_deref(), Some("18 / 20"));
        assert!(view.lines().contains(&"Grade: 18 / 20".to_string()));
    }

    #[test]
    fn test_non_graded_omits_grade_line() {
        let view = ModalView::from_detail(&detail(AssignmentStatus::Submitted));
        assert!(view.grade_line.is_none());
        assert!(!view.lines().iter().any(|l| l.starts_with("Grade:")));
    }

    #[test]
    fn test_optional_lines() {
        let mut d = detail(AssignmentStatus::Submitted);
        d.feedback = Some("".into());
        d.file_url = Some("/files/essay.pdf".into());
        let view = ModalView::from_detail(&d);
        let lines = view.lines();
        assert!(lines.contains(&"Attached File: /files/essay.pdf".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Feedback:")));
        assert!(lines.contains(&format!("Description: {NO_DESCRIPTION}")));
        assert!(lines.contains(&"Due Date: October 5, 2024, 23:59".to_string()));
    }

    #[test]
    fn test_close_triggers_are_idempotent() {
        let mut modal = DetailModal::default();
        modal.open(ModalView::from_detail(&detail(AssignmentStatus::Graded)));
        assert!(!modal.click(ClickTarget::Content));
        assert!(modal.is_open());
        assert!(modal.click(ClickTarget::Backdrop));
        assert!(!modal.close(CloseTrigger::CloseButton));

        modal.open(ModalView::from_detail(&detail(AssignmentStatus::Graded)));
        assert!(!modal.key_down("Enter"));
        assert!(modal.key_down("Escape"));
        assert!(!modal.key_down("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_reopen_replaces_content() {
        let mut modal = DetailModal::default();
        modal.open(ModalView::from_detail(&detail(AssignmentStatus::Graded)));
        let mut other = detail(AssignmentStatus::Submitted);
        other.title = "Essay 2".into();
        modal.open(ModalView::from_detail(&other));
        assert_eq!(modal.view().unwrap().title, "Essay 2");
    }
}
