//! 任务草稿模块
//!
//! 弹窗表单中的任务草稿，以及草稿到任务创建请求体的转换。
//! 枚举的序列化值与任务服务端保持一致。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "baixa")]
    Low,
    #[default]
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// 序列化值，同时用作 `<option value>`
    pub fn value(&self) -> &'static str {
        match self {
            Priority::Low => "baixa",
            Priority::Medium => "media",
            Priority::High => "alta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "concluida")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 2] = [TaskStatus::Pending, TaskStatus::Done];

    pub fn value(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pendente",
            TaskStatus::Done => "concluida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

/// 未保存的任务草稿
///
/// 字段保存表单输入的原始字符串，`due_date` 为 `<input type="date">` 的值 (`YYYY-MM-DD` 或空)。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
    pub description: String,
}

impl TaskDraft {
    /// 取出当前草稿并重置为默认值
    pub fn take(&mut self) -> TaskDraft {
        std::mem::take(self)
    }

    /// 转换为任务创建请求体
    pub fn to_request(&self) -> CreateTaskRequest {
        let description = self.description.trim();
        CreateTaskRequest {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: self.priority,
            status: self.status,
            due_date: NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok(),
        }
    }
}

/// 任务创建请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = TaskDraft::default();
        assert!(draft.title.is_empty());
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.status, TaskStatus::Pending);
    }

    #[test]
    fn test_take_resets_draft() {
        let mut draft = TaskDraft {
            title: "Buy milk".into(),
            priority: Priority::High,
            status: TaskStatus::Done,
            due_date: "2025-03-01".into(),
            description: "2 liters".into(),
        };

        let taken = draft.take();

        assert_eq!(taken.title, "Buy milk");
        assert_eq!(taken.priority, Priority::High);
        assert_eq!(draft, TaskDraft::default());
    }

    #[test]
    fn test_to_request_drops_blank_fields() {
        let draft = TaskDraft {
            title: "  Buy milk ".into(),
            description: "   ".into(),
            due_date: "not-a-date".into(),
            ..TaskDraft::default()
        };

        let req = draft.to_request();

        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description, None);
        assert_eq!(req.due_date, None);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Buy milk", "priority": "media", "status": "pendente"})
        );
    }

    #[test]
    fn test_to_request_parses_due_date() {
        let draft = TaskDraft {
            title: "Report".into(),
            due_date: "2025-03-01".into(),
            ..TaskDraft::default()
        };
        let req = draft.to_request();
        assert_eq!(req.due_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(
            serde_json::to_value(&req).unwrap()["due_date"],
            serde_json::json!("2025-03-01")
        );
    }

    #[test]
    fn test_option_values_roundtrip_through_select() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_value(p.value()), Some(p));
        }
        for s in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_value(s.value()), Some(s));
        }
        assert_eq!(Priority::from_value("urgent"), None);
    }
}
