//! Bank accounts: entity, validation rules, persistence and service.
mod memory;
mod repository;
mod service;
pub mod validation;

pub use memory::*;
pub use repository::*;
pub use service::*;

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::account::validation::not_blank;

pub const MIN_NAME_LENGTH: u64 = 5;
pub const MIN_DOCUMENT_LENGTH: u64 = 11;
pub const MIN_PHONE_LENGTH: u64 = 11;

/// Account as saved on database.
///
/// `id` stays `None` until the storage assigns one.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Validate,
    sqlx::FromRow,
)]
#[serde(default)]
pub struct Account {
    pub id: Option<i64>,
    #[validate(
        custom(function = "not_blank", code = "blank"),
        length(min = MIN_NAME_LENGTH)
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[validate(
        custom(function = "not_blank", code = "blank"),
        length(min = MIN_DOCUMENT_LENGTH)
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub document: String,
    #[validate(
        custom(function = "not_blank", code = "blank"),
        length(min = MIN_PHONE_LENGTH)
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
}

impl Account {
    /// Create an unsaved [`Account`].
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            document: document.into(),
            phone: phone.into(),
        }
    }

    /// Update `id` of [`Account`].
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Read a JSON `null` like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
