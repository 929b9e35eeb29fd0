//! 面板右上角的临时提示

/// 一条提示，`seq` 用于区分先后显示的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u32,
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn new(seq: u32, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            seq,
            text: text.into(),
            is_error,
        }
    }

    /// 到期清除：只有仍在显示的是同一条提示时才清除
    pub fn expire(slot: &mut Option<Notice>, seq: u32) {
        if slot.as_ref().is_some_and(|n| n.seq == seq) {
            *slot = None;
        }
    }
}
