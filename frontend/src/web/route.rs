//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Landing,
    Login,
    Signup,
    /// 任务面板 (需要认证)
    Dashboard,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举，忽略末尾的 `/`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取登录成功后的目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }

    /// 注册成功后的目标（新用户需自行登录）
    pub fn signup_success_redirect() -> Self {
        Self::Login
    }

    /// 根据认证状态执行守卫，返回实际应进入的路由
    pub fn guard(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_path(""), AppRoute::Landing);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/signup/"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/tasks"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_roundtrip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Dashboard,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_anonymous_dashboard_to_login() {
        assert_eq!(AppRoute::Dashboard.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::Dashboard.guard(true), AppRoute::Dashboard);
        assert_eq!(AppRoute::Signup.guard(false), AppRoute::Signup);
        assert_eq!(AppRoute::Landing.guard(true), AppRoute::Landing);
    }
}
