//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppEvent, AppState, ConsoleLevel, DefaultsReceipt, DefaultsSource, DelayedDefaults, Form,
    FormPage, FormPhase, FormSnapshot, PageKind, SubmitOutcome,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Window in which a second Ctrl+C quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// The mounted form page
    pub page: Option<FormPage>,
    config: TuiConfig,
    source: Arc<dyn DefaultsSource>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Bumped on every mount so late defaults can be recognised
    generation: u64,
    /// Last form state seen on the mounted page's snapshot channel
    form_snapshot: Option<FormSnapshot>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance with the user's configuration
    pub fn new() -> Result<Self> {
        let (config, load_error) = match TuiConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (TuiConfig::default(), Some(format!("{e:#}"))),
        };
        let source = Arc::new(DelayedDefaults::new(config.defaults_delay()));
        let mut app = Self::with_source(config, source);

        if let Some(message) = load_error {
            app.push_error(format!("Invalid config, using defaults: {message}"));
        }
        Ok(app)
    }

    /// Create an App with an explicit defaults source and mount the first page
    pub fn with_source(config: TuiConfig, source: Arc<dyn DefaultsSource>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            page: None,
            config,
            source,
            events_tx,
            events_rx,
            generation: 0,
            form_snapshot: None,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        };
        app.mount(PageKind::default());
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// True while the mounted page waits for its defaults
    pub fn is_loading(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.form.is_pending())
    }

    /// Replace the mounted page with a fresh instance of `kind`
    pub fn mount(&mut self, kind: PageKind) {
        self.generation += 1;
        // Dropping the previous page cancels its pending defaults
        self.page = None;
        self.form_snapshot = None;
        self.state.current_page = kind;
        self.page = Some(FormPage::mount(
            kind,
            self.config.form_options(kind),
            Arc::clone(&self.source),
            self.config.defaults_delay(),
            self.generation,
            self.events_tx.clone(),
        ));
    }

    fn switch_page(&mut self, kind: PageKind) {
        if self.page.as_ref().is_some_and(|p| p.kind == kind) {
            return;
        }
        self.mount(kind);
    }

    /// Drain messages from background tasks
    pub fn poll_background(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        self.observe_form();
    }

    /// Follow the mounted form's published snapshots
    fn observe_form(&mut self) {
        let previous = self.observed_phase();
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let Some(snapshot) = page.changed_snapshot() else {
            return;
        };
        if previous != Some(snapshot.phase) {
            tracing::debug!(
                page = page.kind.label(),
                generation = page.generation(),
                phase = snapshot.phase.label(),
                submits = snapshot.submit_count,
                "Form phase changed"
            );
        }
        self.form_snapshot = Some(snapshot);
    }

    /// Form state as last published by the mounted page
    pub fn form_snapshot(&self) -> Option<&FormSnapshot> {
        self.form_snapshot.as_ref()
    }

    /// Phase of the mounted form as last observed
    pub fn observed_phase(&self) -> Option<FormPhase> {
        self.form_snapshot.as_ref().map(|s| s.phase)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DefaultsLoaded(loaded) => {
                let Some(page) = self.page.as_mut() else {
                    tracing::debug!("Defaults arrived with no page mounted");
                    return;
                };
                match page.receive_defaults(loaded) {
                    DefaultsReceipt::Applied => {
                        let message = format!("{}: default values loaded", page.kind.label());
                        self.state.log(ConsoleLevel::Log, message);
                    }
                    DefaultsReceipt::Stale => {}
                    DefaultsReceipt::Failed(message) => {
                        self.state
                            .push_error(format!("Could not load default values: {message}"));
                    }
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < DOUBLE_TAP_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match key.code {
            KeyCode::F(1) => self.switch_page(PageKind::SchemaForm),
            KeyCode::F(2) => self.switch_page(PageKind::FieldForm),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                if let Err(e) = self.copy_last_submission() {
                    self.push_error(format!("Failed to copy: {e}"));
                }
            }
            _ => self.handle_form_key(key),
        }
        Ok(())
    }

    /// Handle keys inside the mounted form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit_row = self
            .page
            .as_ref()
            .is_some_and(|p| p.form.is_submit_row_active());
        if key.code == KeyCode::Enter && on_submit_row {
            self.submit();
            return;
        }

        let Some(page) = self.page.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => page.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => page.form.prev_field(),
            KeyCode::Enter => page.form.next_field(),
            KeyCode::Left => page.form.move_choice_highlight(false),
            KeyCode::Right => page.form.move_choice_highlight(true),
            // Modified letters are shortcuts, never text
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                page.form.input_char(c);
            }
            KeyCode::Backspace => {
                page.form.backspace();
            }
            KeyCode::Delete => {
                page.form.clear_active();
            }
            // Stop waiting for defaults
            KeyCode::Esc if page.has_pending_task() => {
                page.cancel_defaults();
                self.state.log(
                    ConsoleLevel::Warn,
                    format!("{}: default values cancelled", page.kind.label()),
                );
            }
            _ => {}
        }
    }

    /// Submit the mounted form; accepted data goes to the console
    pub fn submit(&mut self) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        let state = &mut self.state;
        let outcome = page.form.handle_submit(|data| state.log_submission(data));

        match outcome {
            SubmitOutcome::Submitted(_) => {
                self.status_message = Some("Submitted!".to_string());
            }
            SubmitOutcome::Invalid(errors) => {
                let detail = errors
                    .iter()
                    .map(|(field, error)| format!("{}: {error}", field.as_str()))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.state
                    .log(ConsoleLevel::Warn, format!("Validation failed ({detail})"));
                self.status_message = Some(format!("Fix {} field(s)", errors.len()));
            }
        }
    }

    fn copy_last_submission(&mut self) -> Result<()> {
        let Some(data) = &self.state.last_submission else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return Ok(());
        };
        let json = serde_json::to_string_pretty(data)?;
        copy_to_clipboard(&json)?;
        self.status_message = Some("Copied last submission".to_string());
        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
