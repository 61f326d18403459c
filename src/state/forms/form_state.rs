//! Form state management: the observable user form controller

use super::field::{FieldMeta, FieldValue, FormField};
use super::schema::{self, FieldName, FormData, FormValues, ValidationErrors};
use std::collections::BTreeMap;
use std::fmt;
use tokio::sync::watch;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Lifecycle of a mounted form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Deferred defaults have not arrived yet
    PendingDefaults,
    #[default]
    Editable,
    Validating,
    Submitted,
    /// Last submission was rejected; errors are shown
    Invalid,
}

impl FormPhase {
    pub fn label(&self) -> &'static str {
        match self {
            FormPhase::PendingDefaults => "loading",
            FormPhase::Editable => "editable",
            FormPhase::Validating => "validating",
            FormPhase::Submitted => "submitted",
            FormPhase::Invalid => "invalid",
        }
    }
}

/// When field validators run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Whole-schema validation on submit; after the first submit, changed
    /// fields are re-validated as they are edited
    #[default]
    OnSubmit,
    /// Each change runs the field's validator; errors show once touched
    OnChange,
}

/// What input events do while defaults are pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingPolicy {
    #[default]
    DisableInputs,
    AllowEdits,
}

/// How arriving defaults are merged into the current values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultsMerge {
    /// Reset to the defaults, keeping fields the user already edited
    #[default]
    KeepDirtyValues,
    /// Set every field value directly
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormOptions {
    pub validation: ValidationMode,
    pub pending: PendingPolicy,
    pub merge: DefaultsMerge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetOptions {
    pub keep_dirty_values: bool,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(FormData),
    Invalid(ValidationErrors),
}

/// Published state of the whole form
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub submit_count: u32,
    pub fields: BTreeMap<FieldName, FieldMeta>,
}

impl FormSnapshot {
    pub fn field(&self, name: FieldName) -> Option<&FieldMeta> {
        self.fields.get(&name)
    }
}

/// The user form: name, age, hobbies and a submit row
pub struct UserForm {
    pub name: FormField,
    pub age: FormField,
    pub hobbies: FormField,
    pub active_field_index: usize,
    options: FormOptions,
    phase: FormPhase,
    submit_count: u32,
    snapshot_tx: watch::Sender<FormSnapshot>,
}

impl fmt::Debug for UserForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserForm")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("hobbies", &self.hobbies)
            .field("active_field_index", &self.active_field_index)
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("submit_count", &self.submit_count)
            .finish()
    }
}

fn value_for(values: &FormValues, name: FieldName) -> FieldValue {
    match name {
        FieldName::Name => FieldValue::Text(values.name.clone()),
        FieldName::Age => FieldValue::Number(values.age.clone()),
        FieldName::Hobbies => FieldValue::Choices(values.hobbies.clone()),
    }
}

impl UserForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 3;

    pub fn new(options: FormOptions) -> Self {
        let name = FormField::text(FieldName::Name, "User name");
        let age = FormField::number(FieldName::Age, "Age");
        let hobbies = FormField::choices(FieldName::Hobbies, "Hobby");
        let initial = FormSnapshot {
            phase: FormPhase::Editable,
            submit_count: 0,
            fields: [&name, &age, &hobbies]
                .into_iter()
                .map(|f| (f.name, f.meta()))
                .collect(),
        };
        let (snapshot_tx, _) = watch::channel(initial);

        Self {
            name,
            age,
            hobbies,
            active_field_index: 0,
            options,
            phase: FormPhase::Editable,
            submit_count: 0,
            snapshot_tx,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::PendingDefaults
    }

    /// Inputs ignore events while this is true
    pub fn is_disabled(&self) -> bool {
        self.is_pending() && self.options.pending == PendingPolicy::DisableInputs
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Age => &self.age,
            FieldName::Hobbies => &self.hobbies,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Age => &mut self.age,
            FieldName::Hobbies => &mut self.hobbies,
        }
    }

    /// Field under the cursor, `None` on the submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Current raw values
    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.as_text().to_string(),
            age: self.age.as_text().to_string(),
            hobbies: self.hobbies.as_choices().to_vec(),
        }
    }

    /// Error text that should be rendered for a field
    pub fn visible_error(&self, name: FieldName) -> Option<String> {
        let field = self.field(name);
        let visible = match self.options.validation {
            ValidationMode::OnSubmit => true,
            ValidationMode::OnChange => field.touched,
        };
        if visible {
            field.error.as_ref().map(ToString::to_string)
        } else {
            None
        }
    }

    /// Mark the form as waiting for deferred defaults
    pub fn begin_loading(&mut self) {
        self.phase = FormPhase::PendingDefaults;
        tracing::debug!("Form waiting for defaults");
        self.publish();
    }

    /// Leave the pending state without defaults
    pub fn fail_loading(&mut self) {
        if self.is_pending() {
            self.phase = FormPhase::Editable;
            self.publish();
        }
    }

    /// User input replacing a field value
    pub fn handle_change(&mut self, name: FieldName, value: FieldValue) -> bool {
        self.edit_field(name, |field| {
            if field.value == value {
                return false;
            }
            field.set_value(value);
            true
        })
    }

    /// Empty the active field
    pub fn clear_active(&mut self) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        let empty = match self.field(name).value {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Number(_) => FieldValue::Number(String::new()),
            FieldValue::Choices(_) => FieldValue::Choices(Vec::new()),
        };
        self.handle_change(name, empty)
    }

    /// Type a character into the active field. Space toggles a choice field.
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        if self.field(name).is_choice() {
            if c == ' ' {
                return self.toggle_choice();
            }
            return false;
        }
        self.edit_field(name, |field| field.push_char(c))
    }

    pub fn backspace(&mut self) -> bool {
        match self.active_field_name() {
            Some(name) => self.edit_field(name, FormField::pop_char),
            None => false,
        }
    }

    /// Toggle the highlighted option of the active choice field
    pub fn toggle_choice(&mut self) -> bool {
        match self.active_field_name() {
            Some(name) => self.edit_field(name, FormField::toggle_highlighted),
            None => false,
        }
    }

    pub fn move_choice_highlight(&mut self, forward: bool) {
        if self.is_disabled() {
            return;
        }
        if let Some(name) = self.active_field_name() {
            let field = self.field_mut(name);
            if field.is_choice() {
                field.move_highlight(forward);
            }
        }
    }

    fn edit_field(&mut self, name: FieldName, edit: impl FnOnce(&mut FormField) -> bool) -> bool {
        if self.is_disabled() {
            tracing::trace!("Ignoring input on {} while defaults are pending", name.as_str());
            return false;
        }
        let changed = edit(self.field_mut(name));
        if changed {
            self.after_edit(name);
        }
        changed
    }

    fn after_edit(&mut self, name: FieldName) {
        let field = self.field_mut(name);
        field.dirty = true;
        field.touched = true;

        if matches!(self.phase, FormPhase::Submitted | FormPhase::Invalid) {
            self.phase = FormPhase::Editable;
        }

        let validate = match self.options.validation {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.submit_count > 0,
        };
        if validate {
            self.revalidate_field(name);
        }
        self.publish();
    }

    fn revalidate_field(&mut self, name: FieldName) {
        let result = schema::validate_field(&self.values(), name);
        self.field_mut(name).error = result.err();
    }

    /// Programmatic update. Does not mark the field dirty or touched.
    pub fn set_field_value(&mut self, name: FieldName, value: FieldValue) {
        self.field_mut(name).set_value(value);
        if self.options.validation == ValidationMode::OnChange {
            self.revalidate_field(name);
        }
        self.publish();
    }

    /// Replace defaults and values. Clears errors and the submit count.
    pub fn reset(&mut self, defaults: &FormData, options: ResetOptions) {
        let values = FormValues::from(defaults);
        let mut kept = Vec::new();

        for name in FieldName::ALL {
            let default_value = value_for(&values, name);
            let field = self.field_mut(name);
            field.default_value = default_value.clone();
            field.error = None;

            if options.keep_dirty_values && field.dirty {
                kept.push(name.as_str());
                continue;
            }
            field.value = default_value;
            field.dirty = false;
            field.touched = false;
        }

        self.submit_count = 0;
        self.phase = FormPhase::Editable;
        tracing::debug!(?kept, "Form reset with defaults");
        self.publish();
    }

    /// Merge deferred defaults according to the configured policy
    pub fn apply_defaults(&mut self, defaults: &FormData) {
        match self.options.merge {
            DefaultsMerge::KeepDirtyValues => self.reset(
                defaults,
                ResetOptions {
                    keep_dirty_values: true,
                },
            ),
            DefaultsMerge::Overwrite => {
                let values = FormValues::from(defaults);
                for name in FieldName::ALL {
                    self.set_field_value(name, value_for(&values, name));
                }
                self.phase = FormPhase::Editable;
                tracing::debug!("Form defaults set field by field");
                self.publish();
            }
        }
    }

    /// Validate everything; on success hand the data to `on_submit`.
    pub fn handle_submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(&FormData),
    {
        self.submit_count += 1;
        self.phase = FormPhase::Validating;
        self.publish();

        match schema::validate(&self.values()) {
            Ok(data) => {
                for name in FieldName::ALL {
                    self.field_mut(name).error = None;
                }
                self.phase = FormPhase::Submitted;
                self.publish();
                on_submit(&data);
                SubmitOutcome::Submitted(data)
            }
            Err(errors) => {
                for name in FieldName::ALL {
                    let error = errors.get(name).cloned();
                    let field = self.field_mut(name);
                    field.error = error;
                    field.touched = true;
                }
                self.phase = FormPhase::Invalid;
                tracing::debug!(%errors, "Submission rejected");
                self.publish();
                SubmitOutcome::Invalid(errors)
            }
        }
    }

    /// Watch every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            phase: self.phase,
            submit_count: self.submit_count,
            fields: FieldName::ALL
                .into_iter()
                .map(|name| (name, self.field(name).meta()))
                .collect(),
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }
}

impl Form for UserForm {
    fn field_count(&self) -> usize {
        4 // name, age, hobbies, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_ROW);
        if index == self.active_field_index {
            return;
        }
        // Leaving a field counts as a blur
        if let Some(name) = self.active_field_name() {
            self.field_mut(name).touched = true;
        }
        self.active_field_index = index;
        self.publish();
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::{FieldError, Hobby};

    fn schema_form() -> UserForm {
        UserForm::new(FormOptions::default())
    }

    fn field_form() -> UserForm {
        UserForm::new(FormOptions {
            validation: ValidationMode::OnChange,
            pending: PendingPolicy::AllowEdits,
            merge: DefaultsMerge::Overwrite,
        })
    }

    fn placeholder() -> FormData {
        FormData {
            name: "placeholder name".to_string(),
            age: 100,
            hobbies: vec![Hobby::Cooking, Hobby::Painting],
        }
    }

    fn fill(form: &mut UserForm, name: &str, age: &str, hobbies: &[Hobby]) {
        form.handle_change(FieldName::Name, FieldValue::Text(name.to_string()));
        form.handle_change(FieldName::Age, FieldValue::Number(age.to_string()));
        form.handle_change(FieldName::Hobbies, FieldValue::Choices(hobbies.to_vec()));
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count() {
            assert_eq!(schema_form().field_count(), 4);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = schema_form();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = schema_form();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = schema_form();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = schema_form();
            assert_eq!(form.get_field(0).unwrap().name, FieldName::Name);
            assert_eq!(form.get_field(1).unwrap().name, FieldName::Age);
            assert_eq!(form.get_field(2).unwrap().name, FieldName::Hobbies);
            assert!(form.get_field(3).is_none());
        }

        #[test]
        fn test_leaving_field_marks_touched() {
            let mut form = schema_form();
            assert!(!form.name.touched);
            form.next_field();
            assert!(form.name.touched);
            assert!(!form.age.touched);
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_updates_active_field() {
            let mut form = schema_form();
            form.input_char('A');
            form.input_char('l');
            assert_eq!(form.name.as_text(), "Al");
            assert!(form.name.dirty);
            form.backspace();
            assert_eq!(form.name.as_text(), "A");
        }

        #[test]
        fn test_space_toggles_hobby() {
            let mut form = schema_form();
            form.set_active_field(2);
            form.move_choice_highlight(true);
            assert!(form.input_char(' '));
            assert_eq!(form.hobbies.as_choices(), &[Hobby::Cooking]);
            assert!(!form.input_char('x'));
        }

        #[test]
        fn test_input_on_submit_row_is_ignored() {
            let mut form = schema_form();
            form.set_active_field(UserForm::SUBMIT_ROW);
            assert!(!form.input_char('a'));
            assert!(!form.backspace());
        }

        #[test]
        fn test_disabled_while_pending() {
            let mut form = schema_form();
            form.begin_loading();
            assert!(form.is_disabled());
            assert!(!form.input_char('a'));
            assert_eq!(form.name.as_text(), "");
        }

        #[test]
        fn test_allow_edits_while_pending() {
            let mut form = field_form();
            form.begin_loading();
            assert!(!form.is_disabled());
            assert!(form.input_char('a'));
            assert_eq!(form.phase(), FormPhase::PendingDefaults);
        }

        #[test]
        fn test_same_value_is_not_a_change() {
            let mut form = schema_form();
            assert!(!form.handle_change(FieldName::Name, FieldValue::Text(String::new())));
            assert!(!form.name.dirty);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_calls_handler_once() {
            let mut form = schema_form();
            fill(&mut form, "Alice", "30", &[Hobby::Reading, Hobby::Cooking]);

            let mut received = Vec::new();
            let outcome = form.handle_submit(|data| received.push(data.clone()));

            let expected = FormData {
                name: "Alice".to_string(),
                age: 30,
                hobbies: vec![Hobby::Reading, Hobby::Cooking],
            };
            assert_eq!(received, vec![expected.clone()]);
            assert_eq!(outcome, SubmitOutcome::Submitted(expected));
            assert_eq!(form.phase(), FormPhase::Submitted);
        }

        #[test]
        fn test_young_age_blocks_submission() {
            let mut form = schema_form();
            fill(&mut form, "Alice", "5", &[Hobby::Reading, Hobby::Cooking]);

            let mut called = false;
            let outcome = form.handle_submit(|_| called = true);

            assert!(!called);
            assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
            assert_eq!(form.age.error, Some(FieldError::TooSmall { min: 10 }));
            assert!(form.visible_error(FieldName::Age).is_some());
            assert_eq!(form.phase(), FormPhase::Invalid);
        }

        #[test]
        fn test_single_hobby_reports_selection_error() {
            let mut form = schema_form();
            fill(&mut form, "Alice", "30", &[Hobby::Reading]);

            let outcome = form.handle_submit(|_| panic!("handler must not run"));

            let SubmitOutcome::Invalid(errors) = outcome else {
                panic!("expected invalid outcome");
            };
            assert_eq!(
                errors.get(FieldName::Hobbies).map(ToString::to_string),
                Some("select exactly 2".to_string())
            );
            assert_eq!(
                form.visible_error(FieldName::Hobbies).as_deref(),
                Some("select exactly 2")
            );
        }

        #[test]
        fn test_failed_submit_marks_all_touched() {
            let mut form = field_form();
            form.handle_submit(|_| {});
            assert!(form.name.touched && form.age.touched && form.hobbies.touched);
            assert_eq!(form.visible_error(FieldName::Name).as_deref(), Some("Required"));
        }

        #[test]
        fn test_edit_after_invalid_returns_to_editable() {
            let mut form = schema_form();
            form.handle_submit(|_| {});
            assert_eq!(form.phase(), FormPhase::Invalid);
            form.input_char('x');
            assert_eq!(form.phase(), FormPhase::Editable);
        }

        #[test]
        fn test_revalidates_on_change_after_first_submit() {
            let mut form = schema_form();
            form.handle_submit(|_| {});
            assert_eq!(form.name.error, Some(FieldError::Required));
            form.input_char('x');
            assert!(form.name.error.is_none());
        }

        #[test]
        fn test_no_validation_before_first_submit() {
            let mut form = schema_form();
            form.input_char('x');
            form.backspace();
            assert!(form.name.error.is_none());
        }

        #[test]
        fn test_submit_count_increments() {
            let mut form = schema_form();
            form.handle_submit(|_| {});
            form.handle_submit(|_| {});
            assert_eq!(form.submit_count(), 2);
        }
    }

    mod on_change_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_appears_as_user_types() {
            let mut form = field_form();
            form.input_char('a');
            form.backspace();
            assert_eq!(form.name.error, Some(FieldError::Required));
            assert_eq!(form.visible_error(FieldName::Name).as_deref(), Some("Required"));
        }

        #[test]
        fn test_untouched_error_is_hidden() {
            let mut form = field_form();
            form.set_field_value(FieldName::Age, FieldValue::Number("3".to_string()));
            assert!(form.age.error.is_some());
            assert!(form.visible_error(FieldName::Age).is_none());
        }
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_populates_untouched_fields() {
            let mut form = schema_form();
            form.begin_loading();
            form.apply_defaults(&placeholder());

            assert_eq!(form.phase(), FormPhase::Editable);
            assert_eq!(form.name.as_text(), "placeholder name");
            assert_eq!(form.age.as_text(), "100");
            assert_eq!(form.hobbies.as_choices(), &[Hobby::Cooking, Hobby::Painting]);
            assert!(!form.name.dirty);
        }

        #[test]
        fn test_keep_dirty_values_preserves_pending_edit() {
            let mut form = UserForm::new(FormOptions {
                pending: PendingPolicy::AllowEdits,
                ..FormOptions::default()
            });
            form.begin_loading();
            form.input_char('Z');
            form.apply_defaults(&placeholder());

            assert_eq!(form.name.as_text(), "Z");
            assert!(form.name.dirty);
            assert_eq!(form.name.default_value, FieldValue::Text("placeholder name".into()));
            assert_eq!(form.age.as_text(), "100");
        }

        #[test]
        fn test_overwrite_replaces_pending_edit() {
            let mut form = field_form();
            form.begin_loading();
            form.input_char('Z');
            form.apply_defaults(&placeholder());

            assert_eq!(form.name.as_text(), "placeholder name");
            assert_eq!(form.phase(), FormPhase::Editable);
        }

        #[test]
        fn test_reset_without_keep_discards_edits() {
            let mut form = schema_form();
            form.input_char('Z');
            form.reset(&placeholder(), ResetOptions::default());
            assert_eq!(form.name.as_text(), "placeholder name");
            assert!(!form.name.dirty);
        }

        #[test]
        fn test_reset_clears_errors_and_submit_count() {
            let mut form = schema_form();
            form.handle_submit(|_| {});
            form.reset(&placeholder(), ResetOptions::default());
            assert_eq!(form.submit_count(), 0);
            assert!(form.name.error.is_none());
        }

        #[test]
        fn test_defaults_then_submit_succeeds() {
            let mut form = schema_form();
            form.begin_loading();
            form.apply_defaults(&placeholder());
            let outcome = form.handle_submit(|_| {});
            assert_eq!(outcome, SubmitOutcome::Submitted(placeholder()));
        }

        #[test]
        fn test_fail_loading_unlocks_inputs() {
            let mut form = schema_form();
            form.begin_loading();
            form.fail_loading();
            assert!(!form.is_disabled());
            assert_eq!(form.phase(), FormPhase::Editable);
        }
    }

    mod observable {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_subscriber_sees_changes() {
            let mut form = schema_form();
            let mut rx = form.subscribe();
            assert!(!rx.has_changed().unwrap());

            form.input_char('a');

            assert!(rx.has_changed().unwrap());
            let snapshot = rx.borrow_and_update().clone();
            let name = snapshot.field(FieldName::Name).unwrap();
            assert_eq!(name.value, FieldValue::Text("a".to_string()));
            assert!(name.dirty);
        }

        #[test]
        fn test_snapshot_tracks_phase_and_errors() {
            let mut form = schema_form();
            let rx = form.subscribe();
            form.handle_submit(|_| {});

            let snapshot = rx.borrow().clone();
            assert_eq!(snapshot, form.snapshot());
            assert_eq!(snapshot.phase, FormPhase::Invalid);
            assert_eq!(snapshot.submit_count, 1);
            assert_eq!(
                snapshot.field(FieldName::Name).unwrap().error.as_deref(),
                Some("Required")
            );
        }

        #[test]
        fn test_publish_without_subscribers_does_not_panic() {
            let mut form = schema_form();
            form.input_char('a');
            form.begin_loading();
        }
    }
}
