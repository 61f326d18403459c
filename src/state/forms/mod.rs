//! Form domain layer
//!
//! Schema validation, the observable form controller, and deferred default
//! population shared by both form pages.

mod defaults;
mod field;
mod form_state;
mod schema;

pub use defaults::{
    DefaultsLoaded, DefaultsSource, DefaultsTask, DelayedDefaults, DEFAULT_DELAY,
};
pub use field::{FieldMeta, FieldValue, FormField};
pub use form_state::{
    DefaultsMerge, Form, FormOptions, FormPhase, FormSnapshot, PendingPolicy, SubmitOutcome,
    UserForm, ValidationMode,
};
pub use schema::{FieldName, FormData, Hobby};

#[cfg(test)]
pub use defaults::{placeholder_defaults, MockDefaultsSource};
