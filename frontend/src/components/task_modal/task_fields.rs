//! 任务表单字段
//!
//! 纯粹的输入渲染，所有值读写都经过 `DraftState`。

use leptos::prelude::*;
use taskdesk_shared::{Priority, TaskStatus};

use super::draft_state::DraftState;

#[component]
pub fn TaskFields(state: DraftState) -> impl IntoView {
    let draft = state.draft;

    view! {
        // 标题
        <div class="form-control">
            <label for="task_title" class="label">
                <span class="label-text">"Title"</span>
            </label>
            <input id="task_title" required
                type="text"
                placeholder="e.g. Prepare the presentation"
                on:input=move |ev| state.edit(|d| d.title = event_target_value(&ev))
                prop:value=move || draft.with(|d| d.title.clone())
                class="input input-bordered w-full"
            />
        </div>

        // 优先级与状态
        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label for="task_priority" class="label">
                    <span class="label-text">"Priority"</span>
                </label>
                <select
                    id="task_priority"
                    class="select select-bordered w-full"
                    on:change=move |ev| {
                        if let Some(priority) = Priority::from_value(&event_target_value(&ev)) {
                            state.edit(|d| d.priority = priority);
                        }
                    }
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! {
                            <option value=p.value() selected=move || draft.with(|d| d.priority == p)>
                                {p.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form-control">
                <label for="task_status" class="label">
                    <span class="label-text">"Status"</span>
                </label>
                <select
                    id="task_status"
                    class="select select-bordered w-full"
                    on:change=move |ev| {
                        if let Some(status) = TaskStatus::from_value(&event_target_value(&ev)) {
                            state.edit(|d| d.status = status);
                        }
                    }
                >
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! {
                            <option value=s.value() selected=move || draft.with(|d| d.status == s)>
                                {s.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>

        // 截止日期
        <div class="form-control">
            <label for="task_due_date" class="label">
                <span class="label-text">"Due date"</span>
            </label>
            <input id="task_due_date"
                type="date"
                on:input=move |ev| state.edit(|d| d.due_date = event_target_value(&ev))
                prop:value=move || draft.with(|d| d.due_date.clone())
                class="input input-bordered w-full"
            />
        </div>

        // 描述
        <div class="form-control">
            <label for="task_description" class="label">
                <span class="label-text">"Description"</span>
            </label>
            <textarea id="task_description"
                placeholder="Details, acceptance criteria, links..."
                on:input=move |ev| state.edit(|d| d.description = event_target_value(&ev))
                prop:value=move || draft.with(|d| d.description.clone())
                class="textarea textarea-bordered w-full min-h-[120px]"
            ></textarea>
        </div>
    }
}
