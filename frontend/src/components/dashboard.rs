mod empty_state;
mod notice;
mod sidebar;

use crate::auth::{fetch_user, logout, logout_outcome, use_auth};
use crate::components::icons::Plus;
use crate::components::task_modal::TaskModal;
use empty_state::EmptyState;
use notice::Notice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sidebar::Sidebar;
use taskdesk_shared::TaskDraft;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let (modal_open, set_modal_open) = signal(false);
    let (logging_out, set_logging_out) = signal(false);
    let (notification, set_notification) = signal(Option::<Notice>::None);
    let notice_seq = StoredValue::new(0u32);

    let notify = move |text: String, is_error: bool| {
        notice_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        set_notification.set(Some(Notice::new(notice_seq.get_value(), text, is_error)));
    };

    // 挂载时加载用户；失败会标记为未登录，路由服务随即跳转到登录页
    spawn_local(async move {
        if let Err(e) = fetch_user(&auth).await {
            log::warn!("leaving dashboard: {}", e);
        }
    });

    let user_name = Signal::derive(move || auth.state.with(|s| s.user.as_ref().map(|u| u.name.clone())));

    let handle_logout = move |()| {
        set_logging_out.set(true);
        spawn_local(async move {
            if let Some(banner) = logout_outcome(logout(&auth).await).banner {
                notify(banner.to_string(), true);
                set_logging_out.set(false);
            }
        });
    };

    // 任务接口尚未接入：只记录请求体并提示
    let handle_save = move |draft: TaskDraft| {
        let request = draft.to_request();
        match serde_json::to_string(&request) {
            Ok(body) => log::info!("task drafted: {}", body),
            Err(e) => log::error!("failed to encode task draft: {}", e),
        }
        notify(format!("Task \"{}\" drafted.", request.title), false);
    };

    // 3秒后清除通知，期间若换了新通知则保留新的
    Effect::new(move |_| {
        if let Some(seq) = notification.with(|n| n.as_ref().map(|n| n.seq)) {
            set_timeout(
                move || set_notification.update(|n| Notice::expire(n, seq)),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <main class="min-h-screen bg-base-100">
            // 通知提示框
            <Show when=move || notification.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        let is_err = notification.with(|n| n.as_ref().is_some_and(|n| n.is_error));
                        if is_err {
                            "alert alert-error shadow-lg"
                        } else {
                            "alert alert-success shadow-lg"
                        }
                    }>
                        <span>{move || notification.get().map(|n| n.text).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="w-full px-4 py-6 lg:px-8">
                <div class="grid grid-cols-1 min-h-[calc(100vh-4rem)] gap-16 lg:grid-cols-[320px_1fr]">
                    <aside class="rounded-2xl bg-primary text-white">
                        <Sidebar user_name=user_name on_logout=handle_logout logging_out=logging_out />
                    </aside>

                    <section class="flex flex-col">
                        <div class="flex items-start justify-between">
                            <div>
                                <h1 class="text-4xl font-bold">"Tasks"</h1>
                                <p class="mt-2 text-base-content/70">"Stay focused! One task at a time."</p>
                            </div>
                            <button class="btn btn-neutral gap-2" on:click=move |_| set_modal_open.set(true)>
                                <Plus attr:class="h-4 w-4" /> "Create task"
                            </button>
                        </div>
                        <div class="mt-8 min-h-[calc(100vh-12rem)] rounded-xl border border-base-300">
                            <div class="p-10">
                                <EmptyState />
                            </div>
                        </div>
                    </section>
                </div>
            </div>

            <TaskModal
                open=modal_open
                on_close=move |()| set_modal_open.set(false)
                on_save=handle_save
            />
        </main>
    }
}
