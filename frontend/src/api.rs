use taskdesk_shared::protocol::ApiRequest;
use thiserror::Error;

use crate::web::{HttpClient, HttpError, HttpRequest, HttpResponse, StorageError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    InvalidBody(String),
    #[error("no valid auth token stored")]
    MissingToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaskApi<H> {
    pub base_url: String,
    pub(crate) client: H,
}

impl<H: HttpClient> TaskApi<H> {
    pub fn new(base_url: &str, client: H) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并检查状态码，返回原始响应
    ///
    /// 需要认证的接口在没有 `authorization` 时不会发出请求。
    pub async fn send<R: ApiRequest>(
        &self,
        request: &R,
        authorization: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let mut req = HttpRequest::new(self.url(R::PATH), R::METHOD)
            .header("Content-Type", "application/json");

        if R::AUTHORIZED {
            let value = authorization.ok_or(ApiError::MissingToken)?;
            req = req.header(taskdesk_shared::HEADER_AUTHORIZATION, value);
        }

        if R::HAS_BODY {
            let body = serde_json::to_string(request)
                .map_err(|e| HttpError::RequestBuild(e.to_string()))?;
            req = req.body(body);
        }

        log::debug!("{} {}", R::METHOD.as_str(), req.url);
        let res = self.client.send(req).await?;

        if !res.ok() {
            return Err(ApiError::Status(res.status));
        }
        Ok(res)
    }

    /// 发送请求并解析响应体
    pub async fn fetch<R: ApiRequest>(
        &self,
        request: &R,
        authorization: Option<&str>,
    ) -> Result<R::Response, ApiError> {
        let res = self.send(request, authorization).await?;
        res.json::<R::Response>()
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::MockHttpClient;
    use serde_json::json;
    use taskdesk_shared::protocol::{HttpMethod, LogoutRequest, UserInfoRequest};
    use taskdesk_shared::{LoginRequest, TokenResponse};

    const BASE: &str = "http://api.test";

    fn api() -> TaskApi<MockHttpClient> {
        TaskApi::new("http://api.test/", MockHttpClient::new())
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            email: "user@example.com".into(),
            password: "12345678".into(),
        }
    }

    #[test]
    fn test_base_url_is_normalized() {
        let api = api();
        assert_eq!(api.base_url, BASE);
        assert_eq!(api.url("/api/auth/login"), "http://api.test/api/auth/login");
        assert_eq!(api.url("api/auth/login"), "http://api.test/api/auth/login");
    }

    #[tokio::test]
    async fn test_fetch_posts_json_body() {
        let api = api();
        api.client.mock_response(
            "http://api.test/api/auth/login",
            200,
            json!({"access_token": "abc", "expires_in": 3600}),
        );

        let res: TokenResponse = api.fetch(&login_request(), None).await.unwrap();
        assert_eq!(res.credentials(), Some(("abc", 3600)));

        let requests = api.client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].header_value("content-type"), Some("application/json"));
        assert_eq!(requests[0].header_value("Authorization"), None);
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"email": "user@example.com", "password": "12345678"}));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let api = api();
        api.client
            .mock_response("http://api.test/api/auth/login", 401, json!({"detail": "no"}));

        let err = api.fetch(&login_request(), None).await.unwrap_err();
        assert!(matches!(err, ApiError::Status(401)));
    }

    #[tokio::test]
    async fn test_unparsable_body_is_invalid() {
        let api = api();
        api.client
            .mock_raw("http://api.test/api/auth/userinfo", 200, "<html>");

        let err = api
            .fetch(&UserInfoRequest, Some("Bearer abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_authorized_request_without_token_is_not_sent() {
        let api = api();

        let err = api.send(&LogoutRequest, None).await.unwrap_err();

        assert!(matches!(err, ApiError::MissingToken));
        assert_eq!(api.client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_authorized_request_carries_header_and_no_body() {
        let api = api();
        api.client
            .mock_response("http://api.test/api/auth/userinfo", 200, json!({"name": "Ana"}));

        let user = api
            .fetch(&UserInfoRequest, Some("Bearer abc"))
            .await
            .unwrap();
        assert_eq!(user.name, "Ana");

        let requests = api.client.requests.borrow();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].header_value("Authorization"), Some("Bearer abc"));
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_http_error() {
        let api = api();
        api.client
            .mock_network_error("http://api.test/api/auth/login");

        let err = api.send(&login_request(), None).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(HttpError::Network(_))));
    }
}
