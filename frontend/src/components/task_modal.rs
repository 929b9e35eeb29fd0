//! 新建任务模态框
//!
//! 受控组件：是否显示由父组件的 `open` 决定，关闭只通过 `on_close` 通知父组件。

mod draft_state;
mod task_fields;

use leptos::prelude::*;
use taskdesk_shared::TaskDraft;

use draft_state::DraftState;
use task_fields::TaskFields;

#[component]
pub fn TaskModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// 提交时收到取出的草稿
    #[prop(into)]
    on_save: Callback<TaskDraft>,
) -> impl IntoView {
    let state = DraftState::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = state.take();
        on_save.run(draft);
        on_close.run(());
    };

    // 只响应遮罩层自身的点击
    let on_backdrop_click = move |ev: leptos::web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 grid place-items-center bg-black/40 backdrop-blur-sm p-4"
                on:click=on_backdrop_click
            >
                <div
                    class="modal-box w-full max-w-xl"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="task-dialog-title"
                >
                    <h3 id="task-dialog-title" class="font-bold text-lg">"New task"</h3>
                    <p class="py-2 text-base-content/70">"Fill in the fields below and click Save."</p>

                    <form on:submit=on_submit class="space-y-4">
                        <TaskFields state=state />

                        <div class="modal-action">
                            <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
