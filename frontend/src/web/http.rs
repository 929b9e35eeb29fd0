//! HTTP 请求封装模块
//!
//! `HttpClient` trait 是浏览器与业务流程之间的接缝：
//! - `BrowserHttpClient` 基于 `gloo-net` 的 fetch 实现
//! - `MockHttpClient` 在本地测试中记录请求并返回预设响应

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use taskdesk_shared::protocol::HttpMethod;
use thiserror::Error;

#[cfg(test)]
use std::{cell::RefCell, collections::HashMap};

/// HTTP 错误类型
#[derive(Debug, Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    Network(String),
    /// 响应体读取失败
    #[error("failed to read response body: {0}")]
    ResponseBody(String),
}

/// HTTP 请求
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 设置请求体
    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP 响应（状态码 + 完整响应体）
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

// =========================================================
// 实现层: 浏览器 fetch
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HttpError::RequestBuild(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::ResponseBody(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // URL -> (Status, Response Body)
    responses: RefCell<HashMap<String, (u16, String)>>,
    // 网络失败的 URL
    failures: RefCell<Vec<String>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            failures: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, url: &str, status: u16, body: serde_json::Value) {
        self.mock_raw(url, status, &body.to_string());
    }

    pub fn mock_raw(&self, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), (status, body.to_string()));
    }

    pub fn mock_network_error(&self, url: &str) {
        self.failures.borrow_mut().push(url.to_string());
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[cfg(test)]
#[async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.borrow_mut().push(req.clone());

        if self.failures.borrow().contains(&req.url) {
            return Err(HttpError::Network("connection refused".to_string()));
        }

        let responses = self.responses.borrow();
        match responses.get(&req.url) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}
