//! 任务草稿状态
//!
//! 把草稿放进一个 `RwSignal`，负责：
//! - 数据的持有
//! - 按字段更新
//! - 提交时取出并重置

use leptos::prelude::*;
use taskdesk_shared::TaskDraft;

/// 模态框内部的草稿状态
///
/// `RwSignal` 实现了 `Copy`，可直接作为 Props 传给子组件。
#[derive(Clone, Copy)]
pub struct DraftState {
    pub draft: RwSignal<TaskDraft>,
}

impl DraftState {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(TaskDraft::default()),
        }
    }

    /// 修改草稿中的某个字段
    pub fn edit(&self, f: impl FnOnce(&mut TaskDraft)) {
        self.draft.update(f);
    }

    /// 取出草稿，同时重置为默认值
    pub fn take(&self) -> TaskDraft {
        self.draft.try_update(TaskDraft::take).unwrap_or_default()
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdesk_shared::{Priority, TaskStatus};

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn test_take_returns_draft_and_resets() {
        with_owner(|| {
            let state = DraftState::new();
            state.edit(|d| {
                d.title = "Buy milk".into();
                d.priority = Priority::High;
                d.status = TaskStatus::Done;
                d.due_date = "2030-01-31".into();
            });

            let taken = state.take();
            assert_eq!(taken.title, "Buy milk");
            assert_eq!(taken.priority, Priority::High);
            assert_eq!(taken.status, TaskStatus::Done);

            let reopened = state.draft.get_untracked();
            assert_eq!(reopened, TaskDraft::default());
            assert!(reopened.title.is_empty());
            assert_eq!(reopened.priority, Priority::Medium);
            assert_eq!(reopened.status, TaskStatus::Pending);
        });
    }
}
