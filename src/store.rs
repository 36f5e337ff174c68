//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TaskError;
use crate::models::TaskCounts;
use crate::storage::TaskStorage;
use crate::task_list::TaskList;

/// State owned by the list component
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All tasks, in display order
    pub tasks: TaskList,
    /// Edit buffer for the task in edit mode
    pub edit_text: String,
    /// Validation error shown under the input
    pub error: Option<TaskError>,
}

impl TodoState {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a list operation; subscribers are notified only when it succeeds.
///
/// `None` once the store has been disposed.
pub fn mutate_tasks<T>(
    store: TodoStore,
    op: impl FnOnce(&mut TaskList) -> Result<T, TaskError>,
) -> Option<Result<T, TaskError>> {
    store.tasks().try_maybe_update(|list| {
        let result = op(list);
        (result.is_ok(), result)
    })
}

/// Persist the list and report counts whenever it changes.
///
/// The first run only subscribes, so an unreadable payload survives until
/// the list is actually changed.
pub fn bind_task_effects(
    store: TodoStore,
    storage: Arc<dyn TaskStorage>,
    on_count_change: Callback<TaskCounts>,
) {
    Effect::new(move |prev: Option<()>| {
        let tasks = store.tasks().read();
        if prev.is_some() {
            match storage.save(tasks.tasks()) {
                Ok(()) => log::debug!("Saved {} tasks", tasks.len()),
                Err(err) => log::error!("Failed to save tasks: {}", err),
            }
        }
    });

    let counts = Memo::new(move |_| store.tasks().read().counts());
    Effect::new(move |_| on_count_change.run(counts.get()));
}
