use leptos::prelude::*;

use crate::components::icons::Inbox;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-6 text-center">
            <p class="max-w-md text-base-content/60">
                "You don't have any tasks yet."
                <br />
                "How about creating one now?"
            </p>
            <Inbox attr:class="h-40 w-40 text-base-content/20" />
        </div>
    }
}
