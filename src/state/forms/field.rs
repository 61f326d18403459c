//! Form field value objects

use super::schema::{FieldError, FieldName, Hobby};
use std::fmt;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Numeric input buffer; parsed by the schema on validation
    Number(String),
    Choices(Vec<Hobby>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Number(s) => f.write_str(s),
            FieldValue::Choices(c) => {
                let names: Vec<&str> = c.iter().map(Hobby::as_str).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Observable view of one field: value plus validation meta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    pub value: FieldValue,
    pub error: Option<String>,
    pub dirty: bool,
    pub touched: bool,
}

/// Represents a single form field with its configuration, value and meta
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: FieldValue,
    /// Value the field was last reset to
    pub default_value: FieldValue,
    pub error: Option<FieldError>,
    /// Set by user input, cleared by a reset
    pub dirty: bool,
    pub touched: bool,
    /// Highlighted option for choice fields
    pub highlighted: usize,
}

impl FormField {
    fn with_value(name: FieldName, label: &str, value: FieldValue) -> Self {
        Self {
            name,
            label: label.to_string(),
            default_value: value.clone(),
            value,
            error: None,
            dirty: false,
            touched: false,
            highlighted: 0,
        }
    }

    /// Create a new text field
    pub fn text(name: FieldName, label: &str) -> Self {
        Self::with_value(name, label, FieldValue::Text(String::new()))
    }

    /// Create a new numeric field
    pub fn number(name: FieldName, label: &str) -> Self {
        Self::with_value(name, label, FieldValue::Number(String::new()))
    }

    /// Create a new multi-select field over [`Hobby::ALL`]
    pub fn choices(name: FieldName, label: &str) -> Self {
        Self::with_value(name, label, FieldValue::Choices(Vec::new()))
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s,
            FieldValue::Choices(_) => "",
        }
    }

    /// Get the selected choices (empty for text fields)
    pub fn as_choices(&self) -> &[Hobby] {
        match &self.value {
            FieldValue::Choices(c) => c,
            _ => &[],
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choices(_))
    }

    /// Replace the value without touching meta flags
    pub fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    /// Push a character to the field value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Number(s) => {
                if c.is_ascii_digit() || (c == '-' && s.is_empty()) {
                    s.push(c);
                    true
                } else {
                    false
                }
            }
            FieldValue::Choices(_) => false,
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Number(s) => s.pop().is_some(),
            FieldValue::Choices(_) => {
                // Choice fields are edited by toggling
                false
            }
        }
    }

    /// Select or deselect the highlighted hobby
    pub fn toggle_highlighted(&mut self) -> bool {
        let Some(hobby) = Hobby::ALL.get(self.highlighted).copied() else {
            return false;
        };
        match &mut self.value {
            FieldValue::Choices(selected) => {
                if let Some(pos) = selected.iter().position(|h| *h == hobby) {
                    selected.remove(pos);
                } else {
                    selected.push(hobby);
                }
                true
            }
            _ => false,
        }
    }

    /// Move the highlighted option, wrapping at both ends
    pub fn move_highlight(&mut self, forward: bool) {
        let count = Hobby::ALL.len();
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.to_string()
    }

    pub fn meta(&self) -> FieldMeta {
        FieldMeta {
            value: self.value.clone(),
            error: self.error.as_ref().map(ToString::to_string),
            dirty: self.dirty,
            touched: self.touched,
        }
    }
}
