//! 作业列表的过滤与排序

use chrono::NaiveDateTime;
use std::cmp::Reverse;

use super::AssignmentService;
use crate::models::assignments::entities::AssignmentCard;
use crate::utils::parse_due_date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    DueDateAsc,
    DueDateDesc,
    TitleAsc,
    TitleDesc,
    /// 无法识别的排序值，保持当前顺序
    #[default]
    Unsorted,
}

impl SortKey {
    /// 解析排序下拉框的值，如 `due_date_asc`
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "due_date_asc" => SortKey::DueDateAsc,
            "due_date_desc" => SortKey::DueDateDesc,
            "title_asc" => SortKey::TitleAsc,
            "title_desc" => SortKey::TitleDesc,
            _ => SortKey::Unsorted,
        }
    }
}

/// 过滤条件：搜索框、课程、状态三个控件加上排序方式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub course: String,
    pub status: String,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new(
        query: impl Into<String>,
        course: impl Into<String>,
        status: impl Into<String>,
        sort: &str,
    ) -> Self {
        Self {
            query: query.into(),
            course: course.into(),
            status: status.into(),
            sort: SortKey::parse(sort),
        }
    }

    /// 标题包含搜索词；课程和状态为空时视为通配，否则做子串匹配（均不区分大小写）
    pub fn matches(&self, card: &AssignmentCard) -> bool {
        let query = self.query.to_lowercase();
        let course = self.course.to_lowercase();
        let status = self.status.to_lowercase();

        card.title.to_lowercase().contains(&query)
            && (course.is_empty() || card.course.to_lowercase().contains(&course))
            && (status.is_empty() || card.status.label().to_lowercase().contains(&status))
    }
}

// 无法解析的日期排在最后，再按原文比较
fn due_key(card: &AssignmentCard) -> (bool, Option<NaiveDateTime>, &str) {
    let parsed = parse_due_date(&card.due_date);
    (parsed.is_none(), parsed, card.due_date.as_str())
}

fn title_key(card: &AssignmentCard) -> (String, &str) {
    (card.title.to_lowercase(), card.title.as_str())
}

/// 返回匹配卡片在 `cards` 中的下标，已按排序方式排好（稳定排序）
pub fn filter_indices(cards: &[&AssignmentCard], filter: &FilterState) -> Vec<usize> {
    let mut matched: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| filter.matches(card))
        .map(|(index, _)| index)
        .collect();

    match filter.sort {
        SortKey::DueDateAsc => matched.sort_by_cached_key(|&i| due_key(cards[i])),
        SortKey::DueDateDesc => matched.sort_by_cached_key(|&i| Reverse(due_key(cards[i]))),
        SortKey::TitleAsc => matched.sort_by_cached_key(|&i| title_key(cards[i])),
        SortKey::TitleDesc => matched.sort_by_cached_key(|&i| Reverse(title_key(cards[i]))),
        SortKey::Unsorted => {}
    }

    matched
}

/// 纯函数版本：返回应当显示的卡片及其顺序
pub fn apply_filters<'a>(cards: &'a [AssignmentCard], filter: &FilterState) -> Vec<&'a AssignmentCard> {
    let refs: Vec<&AssignmentCard> = cards.iter().collect();
    filter_indices(&refs, filter)
        .into_iter()
        .map(|index| refs[index])
        .collect()
}

/// 在页面的卡片列表上应用过滤条件，返回可见卡片数量
pub(super) fn apply_to_board(service: &AssignmentService, filter: &FilterState) -> usize {
    let ui = service.ui();
    let shown: Vec<AssignmentCard> = ui.state().with_board_mut(|board| {
        let order = filter_indices(&board.cards(), filter);
        board.show_only(&order);
        board.visible_cards().into_iter().cloned().collect()
    });

    // 锁已释放，宿主可以在回调里读取页面状态
    let refs: Vec<&AssignmentCard> = shown.iter().collect();
    ui.host().render_board(&refs);
    tracing::debug!("Filter applied: {} card(s) visible", shown.len());
    shown.len()
}
