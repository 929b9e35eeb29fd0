use crate::components::icons::CheckSquare;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="min-h-screen flex flex-col bg-primary text-primary-content">
            <section
                aria-labelledby="hero-title"
                class="flex-1 mx-auto grid grid-cols-1 items-center gap-10 px-6 py-10 md:grid-cols-2 md:gap-12 md:px-10"
            >
                <div class="order-2 flex justify-center md:order-1">
                    <CheckSquare attr:class="h-48 w-48 opacity-80 drop-shadow-md" />
                </div>

                <div class="order-1 max-w-2xl md:order-2">
                    <h1 id="hero-title" class="text-4xl font-extrabold leading-tight tracking-tight md:text-5xl">
                        <span class="block">"Organize your day,"</span>
                        <span class="block">"reach your"</span>
                        <span class="block">"goals!"</span>
                    </h1>

                    <p class="mt-6 max-w-[52ch] text-base/7 opacity-90 md:text-lg/8">
                        "With TaskDesk, managing tasks has never been easier. Keep your focus on what really matters."
                    </p>

                    <div class="mt-8 flex flex-col gap-3">
                        <Link to=AppRoute::Login class="btn btn-lg bg-white text-primary border-none hover:bg-white/95">
                            "Sign in"
                        </Link>
                        <Link to=AppRoute::Signup class="btn btn-lg btn-secondary">
                            "Create account"
                        </Link>
                    </div>

                    <p class="mt-6 text-sm opacity-90">
                        "No account yet? "
                        <Link to=AppRoute::Signup class="underline underline-offset-4">"Get started."</Link>
                    </p>
                </div>
            </section>

            <footer class="border-t border-white/20 px-6 py-6 text-sm opacity-80 md:px-10">
                <p>"© TaskDesk"</p>
            </footer>
        </main>
    }
}
