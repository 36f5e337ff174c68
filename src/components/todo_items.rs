//! Todo Items Component
//!
//! Owns the task list: loads it from storage, persists every change and
//! reports counts to the parent.

use leptos::prelude::*;

use crate::components::{NewTaskInput, TodoRow};
use crate::context::AppContext;
use crate::models::TaskCounts;
use crate::store::{bind_task_effects, TodoState, TodoStateStoreFields, TodoStore};
use crate::task_list::TaskList;

/// Task list with input and rows
#[component]
pub fn TodoItems(
    /// Called with fresh counts whenever the list changes
    #[prop(into)] on_count_change: Callback<TaskCounts>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let tasks = match ctx.storage.load() {
        Ok(Some(stored)) => {
            log::info!("Loaded {} tasks", stored.len());
            TaskList::restore(stored)
        }
        Ok(None) => TaskList::default(),
        Err(err) => {
            log::error!("Failed to load tasks, starting empty: {}", err);
            TaskList::default()
        }
    };

    let store: TodoStore = TodoStore::new(TodoState::new(tasks));
    provide_context(store);

    bind_task_effects(store, ctx.storage.clone(), on_count_change);

    view! {
        <NewTaskInput />
        <div class="todo-list-wrapper">
            <ul class="todo-list">
                <For
                    each=move || store.tasks().read().ids()
                    key=|id| *id
                    children=move |id| view! { <TodoRow id=id /> }
                />
            </ul>
        </div>
    }
}
