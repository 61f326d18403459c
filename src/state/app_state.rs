//! Application state definitions

use super::forms::{DefaultsLoaded, FormData};
use super::PageKind;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Messages delivered to the main loop from background tasks
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    DefaultsLoaded(DefaultsLoaded),
}

/// Severity of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
}

/// One line of the in-app console
#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    pub timestamp: DateTime<Local>,
    pub level: ConsoleLevel,
    pub message: String,
}

/// Maximum number of console lines kept
const CONSOLE_CAPACITY: usize = 200;

/// Global UI state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_page: PageKind,
    pub console: VecDeque<ConsoleEntry>,
    pub last_submission: Option<FormData>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn log(&mut self, level: ConsoleLevel, message: impl Into<String>) {
        if self.console.len() == CONSOLE_CAPACITY {
            self.console.pop_front();
        }
        self.console.push_back(ConsoleEntry {
            timestamp: Local::now(),
            level,
            message: message.into(),
        });
    }

    /// Record an accepted submission in the console
    pub fn log_submission(&mut self, data: &FormData) {
        let json = serde_json::to_string(data).unwrap_or_else(|_| format!("{data:?}"));
        tracing::info!(name = %data.name, age = data.age, "Form submitted: {json}");
        self.log(ConsoleLevel::Log, json);
        self.last_submission = Some(data.clone());
    }
}
