//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，
//! 通过 `KeyValueStore` trait 与会话逻辑解耦。

use thiserror::Error;

#[cfg(test)]
use std::{cell::RefCell, collections::HashMap};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write key `{0}`")]
    Write(String),
}

/// 字符串键值存储
pub trait KeyValueStore {
    /// 键不存在或发生错误时返回 None
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str);
}

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// =========================================================
// 测试环境实现 (MemoryStore)
// =========================================================

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    pub map: RefCell<HashMap<String, String>>,
    pub read_only: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟拒绝写入的存储（如隐私模式、配额已满）
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write(key.to_string()));
        }
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}
