use crate::auth::{signup, signup_outcome, use_auth};
use crate::components::form_field::{ErrorBanner, FormField};
use crate::components::icons::CheckSquare;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdesk_shared::{Field, SignupForm, ValidationErrors};

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let current = form.get_untracked();
        set_error_msg.set(None);
        set_is_submitting.set(true);

        spawn_local(async move {
            let outcome = signup_outcome(signup(&auth, &current).await);
            set_is_submitting.set(false);
            errors.set(outcome.field_errors);
            set_error_msg.set(outcome.banner);
            if let Some(route) = outcome.redirect {
                form.set(SignupForm::default());
                router.navigate_to(route);
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <CheckSquare attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Create your account"</h1>
                        <p class="text-base-content/70">"It only takes a minute."</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" novalidate on:submit=on_submit>
                        <ErrorBanner message=error_msg />

                        <FormField
                            field=Field::Name
                            label="Name"
                            placeholder="Your name"
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=move |v: String| form.update(|f| f.name = v)
                            errors=errors
                        />
                        <FormField
                            field=Field::Email
                            label="E-mail"
                            input_type="email"
                            placeholder="you@example.com"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=move |v: String| form.update(|f| f.email = v)
                            errors=errors
                        />
                        <FormField
                            field=Field::Password
                            label="Password"
                            input_type="password"
                            placeholder="••••••••"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=move |v: String| form.update(|f| f.password = v)
                            errors=errors
                        />
                        <FormField
                            field=Field::ConfirmPassword
                            label="Confirm password"
                            input_type="password"
                            placeholder="••••••••"
                            value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                            on_input=move |v: String| form.update(|f| f.confirm_password = v)
                            errors=errors
                        />

                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Create account".into_any()
                                }}
                            </button>
                        </div>

                        <p class="text-center text-sm text-base-content/70 mt-2">
                            "Already have an account? "
                            <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
