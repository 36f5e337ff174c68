//! Task Collection
//!
//! Ordered task sequence with the list operations. Display order is insertion
//! order; tasks are addressed by their stable id.

use chrono::{DateTime, Utc};

use crate::error::TaskError;
use crate::models::{Task, TaskCounts, TaskId};

/// Result of toggling edit mode on a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditToggle {
    /// Edit mode entered; carries the text to seed the edit buffer with
    Started(String),
    /// Edit mode left without saving
    Cancelled,
}

/// Ordered task collection.
///
/// At most one task has `edit` set at any time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Rebuild a list from persisted tasks.
    ///
    /// Edit mode does not survive a reload since the edit buffer is not stored.
    pub fn restore(mut tasks: Vec<Task>) -> Self {
        for task in &mut tasks {
            task.edit = false;
        }
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Current display position of a task
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// The task currently in edit mode, if any
    #[cfg(test)]
    pub fn editing(&self) -> Option<&Task> {
        self.tasks.iter().find(|task| task.edit)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    /// Append a new task. Text is trimmed and must not be empty.
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Result<TaskId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let task = Task::new(text.to_string(), now);
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Flip the completion flag. Returns the new value.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove a task; later tasks move up one position.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Enter or leave edit mode on a task.
    ///
    /// Entering clears the flag on every other task. Leaving discards the
    /// edit without touching the text.
    pub fn toggle_edit(&mut self, id: TaskId) -> Result<EditToggle, TaskError> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;

        if self.tasks[index].edit {
            self.tasks[index].edit = false;
            return Ok(EditToggle::Cancelled);
        }

        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.edit = i == index;
        }
        Ok(EditToggle::Started(self.tasks[index].text.clone()))
    }

    /// Replace the task text with the edit buffer as-is and leave edit mode.
    pub fn apply_edit(&mut self, id: TaskId, text: &str) -> Result<(), TaskError> {
        let task = self.get_mut(id)?;
        task.text = text.to_string();
        task.edit = false;
        Ok(())
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }
}
