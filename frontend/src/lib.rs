//! TaskDesk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web`: 浏览器 API 封装（HTTP、LocalStorage、History 路由）
//! - `session` / `api`: 令牌存储与 API 客户端
//! - `auth`: 认证流程与认证状态
//! - `components`: UI 组件层

pub mod api;
pub mod auth;
pub mod config;
pub mod logger;
pub mod session;
pub mod web;

mod components {
    pub mod dashboard;
    mod form_field;
    mod icons;
    pub mod landing;
    pub mod login;
    pub mod signup;
    pub mod task_modal;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;
use crate::config::AppConfig;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Landing class="btn btn-link mt-4">"Back to home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 读取令牌）
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
