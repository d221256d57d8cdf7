//! Event handlers for swimlane headers and action menus.
//!
//! Handlers never wait on the store. Each accepted action spawns its
//! mutation on the runtime handle the controller was built with and hands
//! back a [`PendingMutation`] that callers are free to drop. Handlers can
//! therefore run on a host event thread that is not itself inside a tokio
//! runtime.

mod action_menu;
mod header;
#[cfg(test)]
mod test_support;

pub use action_menu::SwimlaneActionMenu;
pub use header::SwimlaneHeaderController;

use crate::error::{Result, SwimlaneError};
use std::future::Future;
use tokio::{runtime::Handle, task::JoinHandle};

/// Handle to a store mutation running in the background
#[derive(Debug)]
pub struct PendingMutation<T> {
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> PendingMutation<T> {
    /// Spawns `mutation`, logging its failure if nobody checks the result
    pub(crate) fn spawn<F>(runtime: &Handle, action: &'static str, mutation: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            let result = mutation.await;
            if let Err(e) = &result {
                tracing::warn!(action, error = %e, "swimlane mutation failed");
            }
            result
        });
        Self { handle }
    }

    /// Waits for the store to acknowledge the mutation
    pub async fn wait(self) -> Result<T> {
        self.handle
            .await
            .map_err(|e| SwimlaneError::TaskFailed(e.to_string()))?
    }
}

/// Trimmed input, or `None` when nothing but whitespace was entered
pub(crate) fn accepted_title(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
