//! Progress Status
//!
//! Header message chosen from the task counts.

use std::fmt;

use crate::models::TaskCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    NoTasks,
    NoneCompleted,
    AllCompleted,
    Progress { completed: usize, total: usize },
}

impl StatusMessage {
    pub fn from_counts(counts: TaskCounts) -> Self {
        let TaskCounts { total, completed } = counts;
        if total == 0 {
            StatusMessage::NoTasks
        } else if completed == 0 {
            StatusMessage::NoneCompleted
        } else if completed == total {
            StatusMessage::AllCompleted
        } else {
            StatusMessage::Progress { completed, total }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::NoTasks => {
                write!(f, "You currently have no tasks. Start adding some to make progress!")
            }
            StatusMessage::NoneCompleted => {
                write!(f, "You haven\u{2019}t completed any tasks yet. Keep going!")
            }
            StatusMessage::AllCompleted => {
                write!(f, "Congratulations! You\u{2019}ve completed all your tasks!")
            }
            StatusMessage::Progress { completed, total } => {
                write!(f, "You've completed {} out of {} tasks. Keep it up!", completed, total)
            }
        }
    }
}
