use crate::models::assignments::entities::{AssignmentCard, AssignmentStatus};

#[derive(Debug, Clone)]
struct CardSlot {
    card: AssignmentCard,
    visible: bool,
}

/// 作业卡片列表
///
/// 过滤时卡片只会被隐藏而不会被移除，保持卡片的身份不变。
#[derive(Debug, Clone, Default)]
pub struct CardBoard {
    slots: Vec<CardSlot>,
}

impl CardBoard {
    pub fn new(cards: Vec<AssignmentCard>) -> Self {
        Self {
            slots: cards
                .into_iter()
                .map(|card| CardSlot {
                    card,
                    visible: true,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 按当前排列顺序的所有卡片（包括隐藏的）
    pub fn cards(&self) -> Vec<&AssignmentCard> {
        self.slots.iter().map(|slot| &slot.card).collect()
    }

    /// 按当前排列顺序的可见卡片
    pub fn visible_cards(&self) -> Vec<&AssignmentCard> {
        self.slots
            .iter()
            .filter(|slot| slot.visible)
            .map(|slot| &slot.card)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&AssignmentCard> {
        self.slots
            .iter()
            .find(|slot| slot.card.id == id)
            .map(|slot| &slot.card)
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.slots
            .iter()
            .find(|slot| slot.card.id == id)
            .map(|slot| slot.visible)
    }

    /// 只显示 `order` 中的卡片（下标指向当前排列），并按该顺序移到末尾
    ///
    /// 隐藏的卡片保持原有相对顺序留在前面，越界或重复的下标被忽略。
    pub fn show_only(&mut self, order: &[usize]) {
        let mut pending: Vec<Option<CardSlot>> =
            std::mem::take(&mut self.slots).into_iter().map(Some).collect();

        let mut shown = Vec::with_capacity(order.len());
        for &index in order {
            if let Some(mut slot) = pending.get_mut(index).and_then(Option::take) {
                slot.visible = true;
                shown.push(slot);
            }
        }

        self.slots = pending
            .into_iter()
            .flatten()
            .map(|mut slot| {
                slot.visible = false;
                slot
            })
            .chain(shown)
            .collect();
    }

    /// 原地更新卡片状态，返回更新后的卡片
    ///
    /// 重新提交后旧的成绩和评语不再有效，离开 Graded 时一并清除。
    pub fn set_status(&mut self, id: &str, status: AssignmentStatus) -> Option<&AssignmentCard> {
        let slot = self.slots.iter_mut().find(|slot| slot.card.id == id)?;
        if status != AssignmentStatus::Graded {
            slot.card.grade = None;
            slot.card.total_marks = None;
            slot.card.feedback = None;
        }
        slot.card.status = status;
        Some(&slot.card)
    }
}
