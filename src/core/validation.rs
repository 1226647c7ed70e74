//! Field rules for user records.
//!
//! Each validator returns an empty string when the value is acceptable and a
//! human-readable message otherwise. The same rules run in the client forms
//! and in the service before anything is persisted.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::models::user::UserInput;

pub const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";
pub const PHONE_LENGTH: usize = 10;
pub const MIN_NAME_LENGTH: usize = 2;

const MANDATORY: &str = "This field is mandatory";

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name pattern"));
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    State,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::State];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::State => "state",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failing fields mapped to their messages. Empty means the record is valid.
pub type FieldErrors = BTreeMap<Field, String>;

pub fn validate_name(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return MANDATORY.to_string();
    }
    if value.chars().count() < MIN_NAME_LENGTH {
        return "Name must be at least 2 alphabets long".to_string();
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return "Name must contain only alphabets".to_string();
    }
    String::new()
}

pub fn validate_email(value: &str) -> String {
    if value.trim().is_empty() {
        return MANDATORY.to_string();
    }
    if !value.ends_with(REQUIRED_EMAIL_SUFFIX) {
        return format!("Email must end with {}", REQUIRED_EMAIL_SUFFIX);
    }
    String::new()
}

pub fn validate_phone(value: &str) -> String {
    if value.is_empty() {
        return MANDATORY.to_string();
    }
    if value.chars().count() != PHONE_LENGTH {
        return "Phone must be exactly 10 digits".to_string();
    }
    if !PHONE_PATTERN.is_match(value) {
        return "Phone must contain only numbers".to_string();
    }
    String::new()
}

pub fn validate_state(value: &str) -> String {
    if value.trim().is_empty() {
        return MANDATORY.to_string();
    }
    String::new()
}

pub fn validate_field(field: Field, value: &str) -> String {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::State => validate_state(value),
    }
}

/// Runs every rule and keeps only the failures.
pub fn validate_user(input: &UserInput) -> FieldErrors {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            let message = validate_field(field, input.get(field));
            (!message.is_empty()).then_some((field, message))
        })
        .collect()
}
