//! 会话令牌存储
//!
//! 在 LocalStorage 中保存 `StoredAuth`，提供读取、过期判断、构造认证头和清除操作。
//! 缺失或损坏的数据一律视为未登录，所有操作都不会 panic。

use taskdesk_shared::{AUTH_STORAGE_KEY, HEADER_AUTHORIZATION, StoredAuth, Timestamp};

use crate::web::{KeyValueStore, StorageError};

/// 记录缺失或已过期
pub fn is_expired(auth: Option<&StoredAuth>) -> bool {
    auth.is_none_or(|auth| auth.is_expired_at(Timestamp::now()))
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 保存登录令牌，覆盖之前的记录
    pub fn save(
        &self,
        access_token: &str,
        token_type: Option<String>,
        lifetime_secs: u64,
    ) -> Result<StoredAuth, StorageError> {
        let auth = StoredAuth::issue(access_token, token_type, lifetime_secs, Timestamp::now());
        let json = serde_json::to_string(&auth)
            .map_err(|_| StorageError::Write(AUTH_STORAGE_KEY.to_string()))?;
        self.store.set(AUTH_STORAGE_KEY, &json)?;
        Ok(auth)
    }

    pub fn read(&self) -> Option<StoredAuth> {
        let raw = self.store.get(AUTH_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(auth) => Some(auth),
            Err(e) => {
                log::warn!("ignoring malformed auth entry: {}", e);
                None
            }
        }
    }

    /// 存在未过期令牌时返回有效记录
    pub fn current(&self) -> Option<StoredAuth> {
        self.read().filter(|auth| !is_expired(Some(auth)))
    }

    /// `Authorization` 头，令牌缺失或过期时返回 None
    pub fn authorization_header(&self) -> Option<(&'static str, String)> {
        self.current()
            .map(|auth| (HEADER_AUTHORIZATION, auth.authorization_value()))
    }

    pub fn clear(&self) {
        self.store.delete(AUTH_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::storage::MemoryStore;

    fn store_with(raw: &str) -> SessionStore<MemoryStore> {
        let store = MemoryStore::new();
        store
            .map
            .borrow_mut()
            .insert(AUTH_STORAGE_KEY.to_string(), raw.to_string());
        SessionStore::new(store)
    }

    #[test]
    fn test_missing_entry_reads_as_logged_out() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.read().is_none());
        assert!(is_expired(None));
        assert!(session.authorization_header().is_none());
    }

    #[test]
    fn test_malformed_entries_read_as_logged_out() {
        for raw in [
            "",
            "not json",
            "{}",
            "null",
            "[1,2,3]",
            r#"{"access_token": 5, "expires_at": 1}"#,
            r#"{"access_token": "abc"}"#,
        ] {
            let session = store_with(raw);
            let auth = session.read();
            assert!(auth.is_none(), "accepted {raw:?}");
            assert!(is_expired(auth.as_ref()));
            assert!(session.authorization_header().is_none());
        }
    }

    #[test]
    fn test_save_then_read_is_not_expired() {
        let session = SessionStore::new(MemoryStore::new());
        let saved = session.save("abc", None, 3600).unwrap();

        let auth = session.read().unwrap();
        assert_eq!(auth, saved);
        assert_eq!(auth.token_type, "bearer");
        assert!(!is_expired(Some(&auth)));
    }

    #[test]
    fn test_save_applies_expiry_margin() {
        let session = SessionStore::new(MemoryStore::new());
        let before = Timestamp::now();
        let auth = session.save("abc", None, 3600).unwrap();
        let after = Timestamp::now();

        let margin = 3570 * 1000;
        assert!(auth.expires_at.as_millis() >= before.as_millis() + margin);
        assert!(auth.expires_at.as_millis() <= after.as_millis() + margin);
    }

    #[test]
    fn test_short_lifetime_is_expired_immediately() {
        let session = SessionStore::new(MemoryStore::new());
        session.save("abc", None, 30).unwrap();
        assert!(is_expired(session.read().as_ref()));
        assert!(session.authorization_header().is_none());
    }

    #[test]
    fn test_expired_entry_has_no_header() {
        let session = store_with(r#"{"access_token":"abc","token_type":"bearer","expires_at":1}"#);
        assert!(session.read().is_some());
        assert!(session.current().is_none());
        assert!(session.authorization_header().is_none());
    }

    #[test]
    fn test_authorization_header_capitalizes_scheme() {
        let session = SessionStore::new(MemoryStore::new());
        session.save("abc", Some("bearer".into()), 3600).unwrap();
        assert_eq!(
            session.authorization_header(),
            Some(("Authorization", "Bearer abc".to_string()))
        );
    }

    #[test]
    fn test_clear_removes_entry() {
        let session = SessionStore::new(MemoryStore::new());
        session.save("abc", None, 3600).unwrap();
        session.clear();
        assert!(session.read().is_none());
    }

    #[test]
    fn test_save_reports_refused_write() {
        let session = SessionStore::new(MemoryStore::read_only());
        assert!(matches!(
            session.save("abc", None, 3600),
            Err(StorageError::Write(_))
        ));
        assert!(session.read().is_none());
    }
}
