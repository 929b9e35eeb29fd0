//! 表单输入组件
//!
//! 标签、输入框与该字段的行内错误信息。

use leptos::prelude::*;
use taskdesk_shared::{Field, ValidationErrors};

use crate::components::icons::AlertCircle;

/// 带行内校验信息的输入框
#[component]
pub fn FormField(
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// 当前值
    #[prop(into)]
    value: Signal<String>,
    /// 输入回调
    #[prop(into)]
    on_input: Callback<String>,
    /// 所在表单的校验结果
    #[prop(into)]
    errors: Signal<ValidationErrors>,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field).map(str::to_string));
    let has_error = move || errors.with(|e| e.contains(field));

    view! {
        <div class="form-control">
            <label class="label" for=field.id()>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=field.id()
                name=field.id()
                type=input_type
                placeholder=placeholder
                class=move || if has_error() { "input input-bordered input-error" } else { "input input-bordered" }
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError message=Signal::derive(message) />
        </div>
    }
}

/// 字段错误信息，无错误时不渲染
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <label class="label">
                <span class="label-text-alt text-error">{move || message.get().unwrap_or_default()}</span>
            </label>
        </Show>
    }
}

/// 表单顶部的通用错误横幅
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm py-2">
                <AlertCircle attr:class="h-5 w-5 shrink-0" />
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
