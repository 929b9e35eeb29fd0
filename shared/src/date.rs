//! 时间类型模块
//!
//! `Timestamp` 是可序列化的毫秒时间戳，用于认证记录的过期时间。
//! 当前时间取自 `chrono::Utc::now()`，在 wasm32 下由 chrono 的 `wasmbind` 特性读取 JS 时钟，
//! 在本地测试中读取系统时钟。

use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::time::Duration;

/// 毫秒时间戳，用于序列化传输和存储
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 当前时间
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 获取秒值
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        let ms = i64::try_from(rhs.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_duration() {
        let ts = Timestamp::new(1_000) + Duration::from_secs(2);
        assert_eq!(ts.as_millis(), 3_000);
        assert_eq!(ts.as_secs(), 3);
    }

    #[test]
    fn test_add_saturates() {
        let ts = Timestamp::new(i64::MAX - 10) + Duration::from_secs(1);
        assert_eq!(ts.as_millis(), i64::MAX);
        let ts = Timestamp::new(0) + Duration::MAX;
        assert_eq!(ts.as_millis(), i64::MAX);
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(Timestamp::now().as_secs() > 1_577_836_800);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Timestamp::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
