use leptos::prelude::*;
use taskdesk_frontend::App;
use taskdesk_frontend::config::AppConfig;
use taskdesk_frontend::logger;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if logger::init(config.log_level).is_ok() {
        log::info!("TaskDesk starting, API at {}", config.api_base_url);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
