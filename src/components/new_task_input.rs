//! New Task Input Component
//!
//! Text field that adds a task on Enter, with the inline validation message.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{mutate_tasks, use_todo_store, TodoStateStoreFields};

/// Input for creating new tasks
#[component]
pub fn NewTaskInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_task = move || {
        let text = new_text.get_untracked();
        let now = ctx.clock.now_utc();
        let Some(result) = mutate_tasks(store, |list| list.add(&text, now)) else {
            return;
        };
        match result {
            Ok(id) => {
                log::debug!("Added task {}", id);
                store.error().set(None);
                set_new_text.set(String::new());
            }
            Err(err) => {
                log::debug!("Rejected task: {}", err);
                store.error().set(Some(err));
            }
        }
    };

    view! {
        <input
            class="new-task-input"
            type="text"
            placeholder="Enter a task..."
            prop:value=move || new_text.get()
            on:input=move |ev| set_new_text.set(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    create_task();
                }
            }
        />
        <p class="input-error">
            {move || store.error().get().map(|err| err.to_string()).unwrap_or_default()}
        </p>
    }
}
