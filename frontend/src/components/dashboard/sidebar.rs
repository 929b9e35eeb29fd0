use leptos::prelude::*;

use crate::components::icons::{ListTodo, LogOut, UserIcon};

/// 侧边栏：问候语、导航与注销按钮
#[component]
pub fn Sidebar(
    /// 用户名，加载完成前为 `None`
    #[prop(into)]
    user_name: Signal<Option<String>>,
    #[prop(into)] on_logout: Callback<()>,
    #[prop(into)] logging_out: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col justify-between p-6">
            <div>
                <div class="flex flex-col items-center gap-4 rounded-2xl bg-white/10 p-6">
                    <div class="avatar placeholder">
                        <div class="w-24 rounded-full ring-4 ring-white/20 bg-white/10">
                            <UserIcon attr:class="h-12 w-12" />
                        </div>
                    </div>
                    <p class="text-center text-sm leading-relaxed text-white/90">
                        "Hello, "
                        <strong>{move || user_name.get().unwrap_or_default()}</strong>
                        "! Ready to organize your day?"
                    </p>
                </div>
                <nav class="mt-6 flex flex-col gap-3">
                    <NavButton label="Profile" active=false>
                        <UserIcon attr:class="h-5 w-5" />
                    </NavButton>
                    <NavButton label="Tasks" active=true>
                        <ListTodo attr:class="h-5 w-5" />
                    </NavButton>
                </nav>
            </div>
            <button
                class="btn mt-6 w-full gap-2 border-none bg-white/20 text-white hover:bg-white/25"
                disabled=move || logging_out.get()
                on:click=move |_| on_logout.run(())
            >
                <LogOut attr:class="h-4 w-4" /> "Sign out"
            </button>
        </div>
    }
}

#[component]
pub fn NavButton(label: &'static str, active: bool, children: Children) -> impl IntoView {
    let class = if active {
        "flex items-center gap-3 rounded-xl px-4 py-3 text-left text-sm font-medium bg-white text-gray-900"
    } else {
        "flex items-center gap-3 rounded-xl px-4 py-3 text-left text-sm font-medium bg-white/10 text-white hover:bg-white/20"
    };

    view! {
        <button type="button" class=class aria-current=active.then_some("page")>
            <span class="inline-flex h-5 w-5 items-center justify-center">{children()}</span>
            <span>{label}</span>
        </button>
    }
}
