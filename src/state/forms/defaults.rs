//! Deferred default population
//!
//! Default values come from a [`DefaultsSource`] that resolves on a
//! background tokio task. The result is delivered to the main loop as an
//! [`AppEvent`] so that only the main loop ever touches form state.

use super::schema::{FormData, Hobby};
use crate::state::{AppEvent, PageKind};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Delay before the simulated slow source answers
pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

/// Something that eventually produces initial form values
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefaultsSource: Send + Sync {
    async fn fetch(&self) -> Result<FormData>;
}

/// Values every page is populated with once the delay elapses
pub fn placeholder_defaults() -> FormData {
    FormData {
        name: "placeholder name".to_string(),
        age: 100,
        hobbies: vec![Hobby::ALL[1], Hobby::ALL[3]],
    }
}

/// Source that waits a fixed delay, then answers with fixed values
#[derive(Debug, Clone)]
pub struct DelayedDefaults {
    delay: Duration,
    values: FormData,
}

impl DelayedDefaults {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            values: placeholder_defaults(),
        }
    }
}

impl Default for DelayedDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl DefaultsSource for DelayedDefaults {
    async fn fetch(&self) -> Result<FormData> {
        tokio::time::sleep(self.delay).await;
        Ok(self.values.clone())
    }
}

/// Message sent when a source resolves
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsLoaded {
    pub page: PageKind,
    /// Mount generation the task was spawned for
    pub generation: u64,
    pub result: Result<FormData, String>,
}

/// Handle to the one-shot population task. Dropping it cancels the task.
#[derive(Debug)]
pub struct DefaultsTask {
    handle: JoinHandle<()>,
    generation: u64,
}

impl DefaultsTask {
    /// Spawn the task on the current tokio runtime
    pub fn spawn(
        source: Arc<dyn DefaultsSource>,
        page: PageKind,
        generation: u64,
        sender: UnboundedSender<AppEvent>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let result = source.fetch().await.map_err(|e| format!("{e:#}"));
            let event = AppEvent::DefaultsLoaded(DefaultsLoaded {
                page,
                generation,
                result,
            });
            if sender.send(event).is_err() {
                tracing::debug!("Defaults resolved after the app shut down");
            }
        });

        Self { handle, generation }
    }

    /// Abort the task if it has not resolved yet
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            tracing::debug!(generation = self.generation, "Cancelling pending defaults");
        }
        self.handle.abort();
    }
}

impl Drop for DefaultsTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
