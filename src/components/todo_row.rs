//! Todo Row Component
//!
//! A single task: completion toggle, date label, edit/apply and delete controls,
//! and the inline edit field.

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::clock::Clock;
use crate::context::AppContext;
use crate::date_format::format_date;
use crate::models::TaskId;
use crate::store::{mutate_tasks, use_todo_store, TodoStateStoreFields, TodoStore};
use crate::task_list::EditToggle;

/// Added-date label for a task.
///
/// Reads the whole list, so every row re-labels on any list change.
fn date_label(store: TodoStore, id: TaskId, clock: Arc<dyn Clock>) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        store
            .tasks()
            .read()
            .get(id)
            .map(|task| format_date(&task.date_added, &clock.now()))
            .unwrap_or_default()
    }
}

/// One task row
#[component]
pub fn TodoRow(id: TaskId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();
    let edit_input = NodeRef::<html::Input>::new();

    let task = Memo::new(move |_| store.tasks().read().get(id).cloned());
    let completed = move || task.with(|t| t.as_ref().is_some_and(|t| t.completed));
    let editing = move || task.with(|t| t.as_ref().is_some_and(|t| t.edit));
    let text = move || task.with(|t| t.as_ref().map(|t| t.text.clone()).unwrap_or_default());

    let date_label = date_label(store, id, ctx.clock.clone());

    let toggle_complete = move |_| {
        let Some(result) = mutate_tasks(store, |list| list.toggle_complete(id)) else {
            return;
        };
        if let Err(err) = result {
            log::warn!("Toggle complete failed: {}", err);
        }
    };

    let toggle_edit = move |_| {
        let Some(result) = mutate_tasks(store, |list| list.toggle_edit(id)) else {
            return;
        };
        match result {
            Ok(EditToggle::Started(current)) => {
                store.edit_text().set(current);
                // Focus once the field is visible
                Timeout::new(0, move || {
                    if let Some(input) = edit_input.get_untracked() {
                        if let Err(err) = input.focus() {
                            log::debug!("Focus on edit field failed: {:?}", err);
                        }
                    }
                })
                .forget();
            }
            Ok(EditToggle::Cancelled) => log::debug!("Edit of {} cancelled", id),
            Err(err) => log::warn!("Toggle edit failed: {}", err),
        }
    };

    let apply_edit = move || {
        let buffer = store.edit_text().get_untracked();
        let Some(result) = mutate_tasks(store, |list| list.apply_edit(id, &buffer)) else {
            return;
        };
        match result {
            Ok(()) => store.edit_text().set(String::new()),
            Err(err) => log::warn!("Apply edit failed: {}", err),
        }
    };

    let delete = move |_| {
        let Some(result) = mutate_tasks(store, |list| list.delete(id)) else {
            return;
        };
        if let Err(err) = result {
            log::warn!("Delete failed: {}", err);
        }
    };

    view! {
        <li class="todo-row">
            <div class="todo-card">
                <div
                    class=move || if completed() { "todo-toggle completed" } else { "todo-toggle" }
                    on:click=toggle_complete
                >
                    <span class="todo-text">{text}</span>
                    <div class=move || if completed() { "check-badge checked" } else { "check-badge" }>
                        <Show when=completed>
                            <span class="check-mark">"✓"</span>
                        </Show>
                    </div>
                </div>
                <div class="todo-divider"></div>
                <div class="todo-footer">
                    <p class="todo-date">{date_label}</p>
                    <div class="todo-actions">
                        {move || if editing() {
                            view! {
                                <button class="action-btn edit-btn" on:click=move |_| apply_edit()>
                                    <span class="action-icon">"✓"</span>
                                    "Apply"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <button class="action-btn edit-btn" on:click=toggle_edit>
                                    <span class="action-icon">"✎"</span>
                                    "Edit"
                                </button>
                            }.into_any()
                        }}
                        <button class="action-btn delete-btn" on:click=delete>
                            <span class="action-icon">"🗑"</span>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
            <input
                node_ref=edit_input
                type="text"
                class=move || if editing() { "todo-edit-input" } else { "todo-edit-input hidden" }
                prop:value=move || store.edit_text().get()
                on:input=move |ev| store.edit_text().set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        apply_edit();
                    }
                }
            />
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::{DateTime, Duration, Local, TimeZone};
    use leptos::reactive::owner::Owner;

    use crate::store::TodoState;

    struct SteppingClock(Mutex<DateTime<Local>>);

    impl SteppingClock {
        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now = *now + by;
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Local> {
            *self.0.lock().unwrap()
        }
    }

    #[test]
    fn test_date_label_refreshes_on_other_row_change() {
        let owner = Owner::new();
        owner.set();

        let start = Local.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let clock = Arc::new(SteppingClock(Mutex::new(start)));

        let store = TodoStore::new(TodoState::default());
        let first = mutate_tasks(store, |list| list.add("Buy milk", clock.now_utc()))
            .unwrap()
            .unwrap();
        let second = mutate_tasks(store, |list| list.add("Walk dog", clock.now_utc()))
            .unwrap()
            .unwrap();

        let label_fn = date_label(store, first, clock.clone());
        let label = Memo::new(move |_| label_fn());
        assert!(label.get().starts_with("Today, "));

        clock.advance(Duration::days(2));
        mutate_tasks(store, |list| list.toggle_complete(second))
            .unwrap()
            .unwrap();

        let refreshed = label.get();
        assert!(!refreshed.starts_with("Today"), "stale label: {}", refreshed);
        assert!(refreshed.starts_with("10/18/26, "));
    }

    #[test]
    fn test_date_label_for_missing_task_is_empty() {
        let owner = Owner::new();
        owner.set();

        let store = TodoStore::new(TodoState::default());
        let label = date_label(store, uuid::Uuid::new_v4(), Arc::new(crate::clock::SystemClock));
        assert_eq!(label(), "");
    }
}
