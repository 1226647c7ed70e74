use std::collections::BTreeMap;

use crate::core::models::user::{User, UserInput};
use crate::core::validation::{Field, FieldErrors, validate_field, validate_user};

/// State behind the add and update forms.
#[derive(Clone, Debug, Default)]
pub struct UserForm {
    values: UserInput,
    errors: FieldErrors,
    submitting: bool,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_user(user: &User) -> Self {
        UserForm {
            values: user.to_input(),
            ..Self::default()
        }
    }

    /// Typing into a field clears that field's pending message.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(&field);
    }

    pub fn blur(&mut self, field: Field) -> Option<&str> {
        let message = validate_field(field, self.values.get(field));
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message);
        }
        self.error(field)
    }

    pub fn validate_all(&mut self) -> bool {
        self.errors = validate_user(&self.values);
        self.errors.is_empty()
    }

    /// The payload to send, or the messages that block sending it.
    pub fn submission(&mut self) -> Result<UserInput, FieldErrors> {
        if self.validate_all() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Shows the server's per-field messages next to the fields they name.
    /// Unknown field names are ignored.
    pub fn apply_server_errors(&mut self, errors: &BTreeMap<String, String>) {
        for (name, message) in errors {
            if let Some(field) = Field::from_name(name) {
                self.errors.insert(field, message.clone());
            }
        }
    }

    /// Replaces the values with a freshly fetched record.
    pub fn load(&mut self, user: &User) {
        self.values = user.to_input();
        self.errors.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn values(&self) -> &UserInput {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
