//! 请求代次
//!
//! 同一目标（详情弹窗、某张卡片的提交）上重叠的请求，只有最后发起的那个
//! 可以修改界面。每次发起请求前领取一个代次，响应回来时代次已过期则丢弃。

use dashmap::DashMap;

/// 某个目标上的一次请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    target: String,
    value: u64,
}

#[derive(Debug, Default)]
pub struct RequestGenerations {
    current: DashMap<String, u64>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为目标领取新的代次，之前领取的全部失效
    pub fn begin(&self, target: impl Into<String>) -> Generation {
        let target = target.into();
        let mut entry = self.current.entry(target.clone()).or_insert(0);
        *entry += 1;
        Generation {
            target,
            value: *entry,
        }
    }

    pub fn is_current(&self, generation: &Generation) -> bool {
        self.current
            .get(&generation.target)
            .is_some_and(|v| *v == generation.value)
    }
}
