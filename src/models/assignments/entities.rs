use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 作业状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssignmentStatus {
    NotSubmitted,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    /// 页面上显示的文本
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::NotSubmitted => "Not Submitted",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for AssignmentStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "not submitted" => Ok(AssignmentStatus::NotSubmitted),
            "submitted" => Ok(AssignmentStatus::Submitted),
            "graded" => Ok(AssignmentStatus::Graded),
            _ => Err(format!("unknown assignment status: {value}")),
        }
    }
}

impl From<AssignmentStatus> for String {
    fn from(status: AssignmentStatus) -> Self {
        status.label().to_string()
    }
}

/// 分数，服务端可能给数字也可能给字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 整数分值不带小数点显示
            Score::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Score::Number(n) => write!(f, "{n}"),
            Score::Text(s) => f.write_str(s),
        }
    }
}

/// 卡片上可见的操作区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActions {
    /// 文件选择 + 提交按钮
    SubmitForm,
    /// "Open" 按钮，查看已提交的文件
    OpenSubmission,
}

/// 作业卡片（列表视图模型）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCard {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub course: String,
    pub status: AssignmentStatus,
    // 截止时间，保持页面渲染时的原始文本
    pub due_date: String,
    #[serde(default)]
    pub grade: Option<Score>,
    #[serde(default)]
    pub total_marks: Option<Score>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl AssignmentCard {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        course: impl Into<String>,
        status: AssignmentStatus,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            course: course.into(),
            status,
            due_date: due_date.into(),
            grade: None,
            total_marks: None,
            feedback: None,
            file_url: None,
        }
    }

    /// 操作区总是由当前状态推导
    pub fn actions(&self) -> CardActions {
        match self.status {
            AssignmentStatus::NotSubmitted => CardActions::SubmitForm,
            AssignmentStatus::Submitted | AssignmentStatus::Graded => CardActions::OpenSubmission,
        }
    }
}

/// 作业详情（详情接口返回，卡片字段的超集）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDetail {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub id: Option<String>,
    pub title: String,
    pub course: String,
    pub status: AssignmentStatus,
    pub due_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub grade: Option<Score>,
    #[serde(default)]
    pub total_marks: Option<Score>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// 用户选择的待上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

pub(crate) fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
