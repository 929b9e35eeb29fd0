//! 认证模块
//!
//! 分为两层：
//! - 流程函数 (`submit_login` 等)：只依赖 `HttpClient` / `KeyValueStore` trait，可在本地测试
//! - `AuthContext`：Leptos 上下文，持有浏览器实现并维护认证状态
//!
//! 路由服务通过注入的认证信号感知状态变化，流程函数不负责导航。

use leptos::prelude::*;
use taskdesk_shared::protocol::{LogoutRequest, UserInfoRequest};
use taskdesk_shared::{LoginForm, SignupForm, StoredAuth, User, ValidationErrors};
use thiserror::Error;

use crate::api::{ApiError, TaskApi};
use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::web::route::AppRoute;
use crate::web::{BrowserHttpClient, HttpClient, KeyValueStore, LocalStorage};

// 统一的失败提示，不向用户暴露具体原因
pub const LOGIN_FAILED: &str = "Could not sign in.";
pub const SIGNUP_FAILED: &str = "Could not complete sign-up.";
pub const LOGOUT_FAILED: &str = "Could not sign out.";

/// 表单提交失败
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 本地校验未通过，未发出请求
    #[error("invalid form: {0}")]
    Invalid(ValidationErrors),
    /// 服务端拒绝或请求失败
    #[error(transparent)]
    Rejected(#[from] ApiError),
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Rejected(_) => None,
        }
    }
}

/// 提交结束后页面应呈现的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// 表单顶部的通用提示
    pub banner: Option<&'static str>,
    /// 逐字段错误，成功或被拒绝时为空
    pub field_errors: ValidationErrors,
    /// 需要跳转的页面
    pub redirect: Option<AppRoute>,
}

impl SubmitOutcome {
    fn from_result<T>(
        result: Result<T, SubmitError>,
        failed: &'static str,
        success: AppRoute,
    ) -> Self {
        match result {
            Ok(_) => Self {
                redirect: Some(success),
                ..Self::default()
            },
            Err(SubmitError::Invalid(field_errors)) => Self {
                field_errors,
                ..Self::default()
            },
            Err(SubmitError::Rejected(_)) => Self {
                banner: Some(failed),
                ..Self::default()
            },
        }
    }
}

pub fn login_outcome<T>(result: Result<T, SubmitError>) -> SubmitOutcome {
    SubmitOutcome::from_result(result, LOGIN_FAILED, AppRoute::auth_success_redirect())
}

pub fn signup_outcome<T>(result: Result<T, SubmitError>) -> SubmitOutcome {
    SubmitOutcome::from_result(result, SIGNUP_FAILED, AppRoute::signup_success_redirect())
}

/// 注销成功后的跳转交给路由服务的认证监听，这里只决定提示
pub fn logout_outcome(result: Result<(), ApiError>) -> SubmitOutcome {
    SubmitOutcome {
        banner: result.err().map(|_| LOGOUT_FAILED),
        ..SubmitOutcome::default()
    }
}

// =========================================================
// 流程函数
// =========================================================

/// 登录：校验 -> 请求令牌 -> 保存令牌
///
/// 任一步骤失败都不会修改已存储的令牌。
pub async fn submit_login<H: HttpClient, S: KeyValueStore>(
    api: &TaskApi<H>,
    session: &SessionStore<S>,
    form: &LoginForm,
) -> Result<StoredAuth, SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;

    let auth = request_token(api, session, form)
        .await
        .inspect_err(|e| log::error!("login failed: {}", e))?;
    log::info!("signed in, token valid until {}", auth.expires_at.as_secs());
    Ok(auth)
}

async fn request_token<H: HttpClient, S: KeyValueStore>(
    api: &TaskApi<H>,
    session: &SessionStore<S>,
    form: &LoginForm,
) -> Result<StoredAuth, ApiError> {
    let body = api.fetch(&form.to_request(), None).await?;
    let (token, lifetime) = body.credentials().ok_or_else(|| {
        ApiError::InvalidBody("missing access_token or expires_in".to_string())
    })?;
    Ok(session.save(token, body.token_type.clone(), lifetime)?)
}

/// 注册：校验 -> 提交。成功后不自动登录
pub async fn submit_signup<H: HttpClient>(
    api: &TaskApi<H>,
    form: &SignupForm,
) -> Result<(), SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;

    api.send(&form.to_request(), None)
        .await
        .inspect_err(|e| log::error!("sign-up failed: {}", e))?;
    Ok(())
}

/// 获取当前用户，没有有效令牌时不发出请求
pub async fn load_current_user<H: HttpClient, S: KeyValueStore>(
    api: &TaskApi<H>,
    session: &SessionStore<S>,
) -> Result<User, ApiError> {
    let authorization = session.authorization_header().map(|(_, value)| value);
    api.fetch(&UserInfoRequest, authorization.as_deref())
        .await
        .inspect_err(|e| log::error!("user info unavailable: {}", e))
}

/// 注销：服务端确认后才清除本地令牌
pub async fn submit_logout<H: HttpClient, S: KeyValueStore>(
    api: &TaskApi<H>,
    session: &SessionStore<S>,
) -> Result<(), ApiError> {
    let authorization = session.authorization_header().map(|(_, value)| value);
    api.send(&LogoutRequest, authorization.as_deref())
        .await
        .inspect_err(|e| log::error!("logout failed: {}", e))?;
    session.clear();
    Ok(())
}

// =========================================================
// Leptos 上下文
// =========================================================

pub type BrowserApi = TaskApi<BrowserHttpClient>;
pub type BrowserSession = SessionStore<LocalStorage>;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 是否已认证
    pub is_authenticated: bool,
    /// 当前用户（面板加载后存在）
    pub user: Option<User>,
}

#[derive(Clone)]
pub struct AuthServices {
    pub api: BrowserApi,
    pub session: BrowserSession,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
    services: StoredValue<AuthServices>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(config: &AppConfig) -> Self {
        let (state, set_state) = signal(AuthState::default());
        let services = StoredValue::new(AuthServices {
            api: TaskApi::new(&config.api_base_url, BrowserHttpClient),
            session: SessionStore::new(LocalStorage),
        });
        Self {
            state,
            set_state,
            services,
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    pub fn services(&self) -> AuthServices {
        self.services.get_value()
    }

    /// 标记为未登录，不触碰已存储的令牌
    pub fn mark_signed_out(&self) {
        self.set_state.set(AuthState::default());
    }

    /// 按存储中的令牌恢复登录状态：存在未过期令牌即视为已登录
    pub fn restore<S: KeyValueStore>(&self, session: &SessionStore<S>) {
        let has_token = session.current().is_some();
        if !has_token {
            log::debug!("no valid token stored, starting signed out");
        }
        self.set_state.update(|state| state.is_authenticated = has_token);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 LocalStorage 初始化认证状态
pub fn init_auth(ctx: &AuthContext) {
    ctx.restore(&ctx.services().session);
}

pub async fn login(ctx: &AuthContext, form: &LoginForm) -> Result<(), SubmitError> {
    let AuthServices { api, session } = ctx.services();
    submit_login(&api, &session, form).await?;
    ctx.set_state.update(|state| state.is_authenticated = true);
    Ok(())
}

pub async fn signup(ctx: &AuthContext, form: &SignupForm) -> Result<(), SubmitError> {
    let AuthServices { api, .. } = ctx.services();
    submit_signup(&api, form).await
}

/// 加载当前用户；失败时标记为未登录，由路由服务重定向到登录页
pub async fn fetch_user(ctx: &AuthContext) -> Result<User, ApiError> {
    let AuthServices { api, session } = ctx.services();
    match load_current_user(&api, &session).await {
        Ok(user) => {
            ctx.set_state.update(|state| state.user = Some(user.clone()));
            Ok(user)
        }
        Err(e) => {
            ctx.mark_signed_out();
            Err(e)
        }
    }
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub async fn logout(ctx: &AuthContext) -> Result<(), ApiError> {
    let AuthServices { api, session } = ctx.services();
    submit_logout(&api, &session).await?;
    ctx.mark_signed_out();
    Ok(())
}
