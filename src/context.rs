//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use crate::clock::Clock;
use crate::storage::TaskStorage;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Time source for new tasks and date labels
    pub clock: Arc<dyn Clock>,
    /// Where the task array is persisted
    pub storage: Arc<dyn TaskStorage>,
}

impl AppContext {
    pub fn new(clock: Arc<dyn Clock>, storage: Arc<dyn TaskStorage>) -> Self {
        Self { clock, storage }
    }
}
