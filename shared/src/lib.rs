use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod date;
pub mod protocol;
pub mod task;
pub mod validation;

pub use date::Timestamp;
pub use task::{CreateTaskRequest, Priority, TaskDraft, TaskStatus};
pub use validation::{Field, LoginForm, SignupForm, ValidationErrors};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存认证信息的键
pub const AUTH_STORAGE_KEY: &str = "auth_token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// 令牌提前过期的安全余量，避免请求途中令牌失效
pub const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 登录接口的响应体
///
/// 字段均为可选：2xx 响应缺少字段时应视为无效响应，而不是解析失败。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl TokenResponse {
    /// 返回 `(access_token, expires_in)`，任一缺失或为空时返回 None
    pub fn credentials(&self) -> Option<(&str, u64)> {
        let token = self.access_token.as_deref().filter(|t| !t.is_empty())?;
        let expires_in = self.expires_in.filter(|secs| *secs > 0)?;
        Some((token, expires_in))
    }
}

/// 持久化在 LocalStorage 中的认证记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAuth {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_at: Timestamp,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

impl StoredAuth {
    /// 根据服务端给出的有效期创建记录
    ///
    /// `expires_at = now + max(0, lifetime - 30s)`
    pub fn issue(
        access_token: impl Into<String>,
        token_type: Option<String>,
        lifetime_secs: u64,
        now: Timestamp,
    ) -> Self {
        let lifetime = Duration::from_secs(lifetime_secs).saturating_sub(EXPIRY_MARGIN);
        Self {
            access_token: access_token.into(),
            token_type: token_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(default_token_type),
            expires_at: now + lifetime,
        }
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    /// `Authorization` 头的值，方案名首字母大写 (`bearer` -> `Bearer`)
    pub fn authorization_value(&self) -> String {
        let scheme = self.token_type.trim();
        let scheme = if scheme.is_empty() {
            DEFAULT_TOKEN_TYPE
        } else {
            scheme
        };

        let mut chars = scheme.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} {}", capitalized, self.access_token)
    }
}

/// 用户信息接口返回的用户对象，界面只读取 `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Timestamp = Timestamp::new(1_700_000_000_000);

    #[test]
    fn test_issue_subtracts_margin() {
        let auth = StoredAuth::issue("abc", None, 3600, NOW);
        assert_eq!(auth.expires_at.as_millis(), NOW.as_millis() + 3570 * 1000);
        assert_eq!(auth.token_type, "bearer");
    }

    #[test]
    fn test_issue_short_lifetime_expires_immediately() {
        let auth = StoredAuth::issue("abc", None, 10, NOW);
        assert_eq!(auth.expires_at, NOW);
        assert!(auth.is_expired_at(NOW));
    }

    #[test]
    fn test_not_expired_before_deadline() {
        let auth = StoredAuth::issue("abc", Some("bearer".into()), 31, NOW);
        assert!(!auth.is_expired_at(NOW));
        assert!(auth.is_expired_at(NOW + Duration::from_secs(1)));
    }

    #[test]
    fn test_authorization_value_capitalizes_scheme() {
        let auth = StoredAuth::issue("abc", Some("bearer".into()), 3600, NOW);
        assert_eq!(auth.authorization_value(), "Bearer abc");

        let mut blank = auth.clone();
        blank.token_type = String::new();
        assert_eq!(blank.authorization_value(), "Bearer abc");
    }

    #[test]
    fn test_stored_auth_defaults_token_type() {
        let auth: StoredAuth =
            serde_json::from_str(r#"{"access_token":"t","expires_at":5}"#).unwrap();
        assert_eq!(auth.token_type, "bearer");
        assert_eq!(auth.expires_at, Timestamp::new(5));
    }

    #[test]
    fn test_token_response_requires_token_and_lifetime() {
        let full: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":3600}"#).unwrap();
        assert_eq!(full.credentials(), Some(("abc", 3600)));

        let missing: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(missing.credentials(), None);

        let empty: TokenResponse =
            serde_json::from_str(r#"{"access_token":"","expires_in":60}"#).unwrap();
        assert_eq!(empty.credentials(), None);
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Ana","email":"a@b.co","role":"x"}"#).unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.id, Some(1));
    }
}
