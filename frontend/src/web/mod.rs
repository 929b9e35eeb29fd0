//! 原生 Web API 封装模块
//!
//! 对浏览器 API 的轻量级封装：fetch、LocalStorage、History 路由。
//! HTTP 与存储以 trait 暴露，业务流程可在本地测试中替换为内存实现。

pub mod http;
pub mod route;
pub mod router;
pub mod storage;

pub use http::{BrowserHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse};
pub use storage::{KeyValueStore, LocalStorage, StorageError};
