//! Form pages: the two alternative renditions of the user form

use super::forms::{
    DefaultsLoaded, DefaultsMerge, DefaultsSource, DefaultsTask, FormOptions, FormSnapshot,
    PendingPolicy, UserForm, ValidationMode,
};
use super::AppEvent;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

/// Which form page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// Whole-schema validation, defaults applied by a reset that keeps dirty
    /// values, inputs disabled while loading
    #[default]
    SchemaForm,
    /// Inline per-field validators, defaults set field by field after mount
    FieldForm,
}

impl PageKind {
    pub const ALL: [PageKind; 2] = [PageKind::SchemaForm, PageKind::FieldForm];

    pub fn label(&self) -> &'static str {
        match self {
            PageKind::SchemaForm => "Schema Form",
            PageKind::FieldForm => "Field Form",
        }
    }

    /// Function key that opens the page
    pub fn shortcut(&self) -> &'static str {
        match self {
            PageKind::SchemaForm => "F1",
            PageKind::FieldForm => "F2",
        }
    }

    pub fn default_options(&self) -> FormOptions {
        match self {
            PageKind::SchemaForm => FormOptions {
                validation: ValidationMode::OnSubmit,
                pending: PendingPolicy::DisableInputs,
                merge: DefaultsMerge::KeepDirtyValues,
            },
            PageKind::FieldForm => FormOptions {
                validation: ValidationMode::OnChange,
                pending: PendingPolicy::AllowEdits,
                merge: DefaultsMerge::Overwrite,
            },
        }
    }
}

/// How a delivered defaults message was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultsReceipt {
    Applied,
    /// Message belongs to a page that is no longer mounted
    Stale,
    Failed(String),
}

/// A mounted page: a fresh form plus its pending defaults task
#[derive(Debug)]
pub struct FormPage {
    pub kind: PageKind,
    pub form: UserForm,
    generation: u64,
    mounted_at: Instant,
    delay: Duration,
    defaults_task: Option<DefaultsTask>,
    snapshots: watch::Receiver<FormSnapshot>,
}

impl FormPage {
    /// Create the form and start populating its defaults in the background
    pub fn mount(
        kind: PageKind,
        options: FormOptions,
        source: Arc<dyn DefaultsSource>,
        delay: Duration,
        generation: u64,
        sender: UnboundedSender<AppEvent>,
    ) -> Self {
        let mut form = UserForm::new(options);
        let snapshots = form.subscribe();
        form.begin_loading();
        let task = DefaultsTask::spawn(source, kind, generation, sender);
        tracing::debug!(page = kind.label(), generation, "Mounted page");

        Self {
            kind,
            form,
            generation,
            mounted_at: Instant::now(),
            delay,
            defaults_task: Some(task),
            snapshots,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Eased progress of the pending defaults, `None` once loaded
    pub fn loading_progress(&self) -> Option<f32> {
        if !self.form.is_pending() {
            return None;
        }
        if self.delay.is_zero() {
            return Some(1.0);
        }
        let progress =
            (self.mounted_at.elapsed().as_secs_f32() / self.delay.as_secs_f32()).min(1.0);
        Some(simple_easing::cubic_out(progress))
    }

    /// Apply a delivered defaults message if it belongs to this mount
    pub fn receive_defaults(&mut self, loaded: DefaultsLoaded) -> DefaultsReceipt {
        if loaded.page != self.kind || loaded.generation != self.generation {
            tracing::warn!(
                page = loaded.page.label(),
                generation = loaded.generation,
                "Ignoring defaults for an unmounted page"
            );
            return DefaultsReceipt::Stale;
        }
        // Already resolved or cancelled; a queued message must not land
        if self.defaults_task.take().is_none() {
            tracing::debug!(page = self.kind.label(), "Ignoring defaults after cancel");
            return DefaultsReceipt::Stale;
        }

        match loaded.result {
            Ok(data) => {
                self.form.apply_defaults(&data);
                DefaultsReceipt::Applied
            }
            Err(message) => {
                tracing::warn!("Loading defaults failed: {message}");
                self.form.fail_loading();
                DefaultsReceipt::Failed(message)
            }
        }
    }

    /// Stop waiting for defaults; the form stays as it is
    pub fn cancel_defaults(&mut self) {
        if let Some(task) = self.defaults_task.take() {
            task.cancel();
        }
        self.form.fail_loading();
    }

    pub fn has_pending_task(&self) -> bool {
        self.defaults_task.is_some()
    }

    /// Latest published form state if it changed since the last call
    pub fn changed_snapshot(&mut self) -> Option<FormSnapshot> {
        if !self.snapshots.has_changed().unwrap_or(false) {
            return None;
        }
        Some(self.snapshots.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{placeholder_defaults, DelayedDefaults, FormPhase, Hobby};
    use tokio::sync::mpsc;

    fn mount(kind: PageKind, generation: u64) -> (FormPage, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let source = Arc::new(DelayedDefaults::new(Duration::from_secs(3)));
        let page = FormPage::mount(
            kind,
            kind.default_options(),
            source,
            Duration::from_secs(3),
            generation,
            tx,
        );
        (page, rx)
    }

    fn loaded(kind: PageKind, generation: u64) -> DefaultsLoaded {
        DefaultsLoaded {
            page: kind,
            generation,
            result: Ok(placeholder_defaults()),
        }
    }

    mod page_kind {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_schema_form() {
            assert_eq!(PageKind::default(), PageKind::SchemaForm);
        }

        #[test]
        fn test_policies_differ() {
            let schema = PageKind::SchemaForm.default_options();
            let field = PageKind::FieldForm.default_options();
            assert_eq!(schema.pending, PendingPolicy::DisableInputs);
            assert_eq!(schema.merge, DefaultsMerge::KeepDirtyValues);
            assert_eq!(field.validation, ValidationMode::OnChange);
            assert_eq!(field.merge, DefaultsMerge::Overwrite);
        }
    }

    mod form_page {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_mount_starts_pending() {
            let (page, _rx) = mount(PageKind::SchemaForm, 1);
            assert_eq!(page.form.phase(), FormPhase::PendingDefaults);
            assert!(page.form.is_disabled());
            assert!(page.has_pending_task());
            assert!(page.loading_progress().is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_defaults_populate_fields_after_delay() {
            let (mut page, mut rx) = mount(PageKind::SchemaForm, 1);

            let AppEvent::DefaultsLoaded(message) = rx.recv().await.unwrap();
            assert_eq!(page.receive_defaults(message), DefaultsReceipt::Applied);

            assert_eq!(page.form.name.as_text(), "placeholder name");
            assert_eq!(page.form.age.as_text(), "100");
            assert_eq!(
                page.form.hobbies.as_choices(),
                &[Hobby::Cooking, Hobby::Painting]
            );
            assert!(page.loading_progress().is_none());
            assert!(!page.has_pending_task());
        }

        #[tokio::test(start_paused = true)]
        async fn test_other_generation_is_stale() {
            let (mut page, _rx) = mount(PageKind::FieldForm, 2);
            let receipt = page.receive_defaults(loaded(PageKind::FieldForm, 1));
            assert_eq!(receipt, DefaultsReceipt::Stale);
            assert!(page.form.is_pending());
        }

        #[tokio::test(start_paused = true)]
        async fn test_other_page_is_stale() {
            let (mut page, _rx) = mount(PageKind::FieldForm, 2);
            let receipt = page.receive_defaults(loaded(PageKind::SchemaForm, 2));
            assert_eq!(receipt, DefaultsReceipt::Stale);
        }

        #[tokio::test(start_paused = true)]
        async fn test_failed_defaults_unlock_form() {
            let (mut page, _rx) = mount(PageKind::SchemaForm, 1);
            let receipt = page.receive_defaults(DefaultsLoaded {
                page: PageKind::SchemaForm,
                generation: 1,
                result: Err("boom".to_string()),
            });
            assert_eq!(receipt, DefaultsReceipt::Failed("boom".to_string()));
            assert_eq!(page.form.phase(), FormPhase::Editable);
            assert_eq!(page.form.name.as_text(), "");
        }

        #[tokio::test(start_paused = true)]
        async fn test_field_form_edit_is_overwritten() {
            let (mut page, _rx) = mount(PageKind::FieldForm, 1);
            page.form.input_char('Q');
            page.receive_defaults(loaded(PageKind::FieldForm, 1));
            assert_eq!(page.form.name.as_text(), "placeholder name");
        }

        #[tokio::test(start_paused = true)]
        async fn test_queued_defaults_ignored_after_cancel() {
            let (mut page, mut rx) = mount(PageKind::FieldForm, 1);
            tokio::time::sleep(Duration::from_secs(4)).await;

            page.cancel_defaults();
            page.form.input_char('Q');

            let AppEvent::DefaultsLoaded(message) = rx.recv().await.unwrap();
            assert_eq!(page.receive_defaults(message), DefaultsReceipt::Stale);
            assert_eq!(page.form.name.as_text(), "Q");
        }

        #[tokio::test(start_paused = true)]
        async fn test_second_delivery_is_stale() {
            let (mut page, _rx) = mount(PageKind::SchemaForm, 1);
            assert_eq!(
                page.receive_defaults(loaded(PageKind::SchemaForm, 1)),
                DefaultsReceipt::Applied
            );
            assert_eq!(
                page.receive_defaults(loaded(PageKind::SchemaForm, 1)),
                DefaultsReceipt::Stale
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_changed_snapshot_tracks_form() {
            let (mut page, _rx) = mount(PageKind::FieldForm, 1);

            let snapshot = page.changed_snapshot().unwrap();
            assert_eq!(snapshot.phase, FormPhase::PendingDefaults);
            assert!(page.changed_snapshot().is_none());

            page.form.input_char('Z');
            let snapshot = page.changed_snapshot().unwrap();
            assert!(snapshot.field(crate::state::FieldName::Name).unwrap().dirty);
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancel_defaults() {
            let (mut page, mut rx) = mount(PageKind::SchemaForm, 1);
            page.cancel_defaults();
            assert!(!page.has_pending_task());
            assert!(!page.form.is_pending());
            assert!(rx.recv().await.is_none());
        }
    }
}
