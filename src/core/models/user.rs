use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::validation::Field;

/// A persisted contact record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
}

impl User {
    pub fn from_input(id: Uuid, input: UserInput) -> Self {
        User {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            state: input.state,
        }
    }

    /// The value shown in the given column.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::State => &self.state,
        }
    }

    pub fn to_input(&self) -> UserInput {
        UserInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            state: self.state.clone(),
        }
    }
}

/// The editable fields of a record, as submitted by the forms.
/// Missing fields deserialize as empty so validation can report them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
}

impl UserInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::State => &self.state,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::State => &mut self.state,
        };
        *slot = value.into();
    }
}
