//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务，初始路由同样经过守卫
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial_route = requested.guard(is_authenticated.get_untracked());
        if initial_route != requested {
            log::info!("[Router] {} requires auth, starting at {}", requested, initial_route);
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate_to(&self, target_route: AppRoute) {
        let is_auth = self.is_authenticated.get_untracked();
        let route = target_route.guard(is_auth);

        if route != target_route {
            log::info!("[Router] Access to {} denied. Redirecting to {}.", target_route, route);
        }

        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let route = target_route.guard(is_authenticated.get_untracked());

            // popstate 时也执行守卫逻辑
            if route != target_route {
                replace_history_state(route.to_path());
            }
            set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态失效时，若位于受保护页面则自动重定向到登录页
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if !is_auth && route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                log::info!("[Router] Auth state changed: signed out, redirecting to login.");
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，拦截点击并交给路由服务处理
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
