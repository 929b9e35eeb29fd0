use crate::{LoginRequest, RegisterRequest, TokenResponse, User};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries the stored bearer token.
    const AUTHORIZED: bool = false;
    /// Whether the request is sent with a JSON body.
    const HAS_BODY: bool = true;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// The server answers with a token, but a fresh account is not signed in.
impl ApiRequest for RegisterRequest {
    type Response = IgnoredAny;
    const PATH: &'static str = "/api/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Fetch the signed-in user
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserInfoRequest;

impl ApiRequest for UserInfoRequest {
    type Response = User;
    const PATH: &'static str = "/api/auth/userinfo";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHORIZED: bool = true;
    const HAS_BODY: bool = false;
}

/// Revoke the current token
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = IgnoredAny;
    const PATH: &'static str = "/api/auth/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHORIZED: bool = true;
    const HAS_BODY: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta<R: ApiRequest>() -> (&'static str, HttpMethod, bool, bool) {
        (R::PATH, R::METHOD, R::AUTHORIZED, R::HAS_BODY)
    }

    #[test]
    fn test_endpoint_metadata() {
        assert_eq!(
            meta::<LoginRequest>(),
            ("/api/auth/login", HttpMethod::Post, false, true)
        );
        assert_eq!(
            meta::<RegisterRequest>(),
            ("/api/auth/register", HttpMethod::Post, false, true)
        );
        assert_eq!(
            meta::<UserInfoRequest>(),
            ("/api/auth/userinfo", HttpMethod::Get, true, false)
        );
        assert_eq!(
            meta::<LogoutRequest>(),
            ("/api/auth/logout", HttpMethod::Post, true, false)
        );
    }

    #[test]
    fn test_register_body_omits_confirmation() {
        let req = RegisterRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "Secret123".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ana", "email": "ana@example.com", "password": "Secret123"})
        );
    }
}
