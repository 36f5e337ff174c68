//! Today's Tasks App
//!
//! Root view: header with progress status, the task list and a footer.

use std::sync::Arc;

use leptos::prelude::*;

use crate::clock::SystemClock;
use crate::components::{StatusHeader, TodoItems};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::TaskCounts;
use crate::storage::{LocalTaskStorage, MemoryTaskStorage, TaskStorage};

/// Pick localStorage when the browser exposes it, memory otherwise
fn task_storage(config: &AppConfig) -> Arc<dyn TaskStorage> {
    let available = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .is_some();
    if available {
        Arc::new(LocalTaskStorage::new(config.storage_key.clone()))
    } else {
        log::warn!("localStorage unavailable, tasks will not survive a reload");
        Arc::new(MemoryTaskStorage::new())
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = task_storage(&config);
    provide_context(AppContext::new(Arc::new(SystemClock), storage));

    // Reported by the list
    let (counts, set_counts) = signal(TaskCounts::default());

    view! {
        <div class="app-layout">
            <StatusHeader counts=counts />
            <TodoItems on_count_change=move |next: TaskCounts| set_counts.set(next) />
            <p class="app-footer">
                "Built with "
                <a href="https://leptos.dev" class="footer-link">"Leptos"</a>
                " and Rust, compiled to WebAssembly."
            </p>
        </div>
    }
}
