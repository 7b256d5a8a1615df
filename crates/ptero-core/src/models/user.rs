use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub root_admin: bool,
    #[serde(rename = "2fa", default)]
    pub two_factor: bool,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Left unset, the panel emails the user a link to choose one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_identity(&self.email, &self.username, &self.first_name, &self.last_name)?;
        validate::optional_length("external_id", self.external_id.as_deref(), 1, validate::MAX_STRING)
    }
}

/// Body for `PATCH /users/{id}`.
///
/// The panel re-validates the whole identity on update, so email, username
/// and both names are always sent. Start from [`UserUpdate::from`] a
/// fetched [`User`] to change a single field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: None,
            root_admin: Some(user.root_admin),
            language: (!user.language.is_empty()).then(|| user.language.clone()),
            external_id: user.external_id.clone(),
        }
    }
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_identity(&self.email, &self.username, &self.first_name, &self.last_name)?;
        validate::optional_length("external_id", self.external_id.as_deref(), 1, validate::MAX_STRING)
    }
}

fn validate_identity(email: &str, username: &str, first_name: &str, last_name: &str) -> Result<()> {
    validate::email("email", email)?;
    validate::username("username", username)?;
    validate::length("first_name", first_name, 1, validate::MAX_STRING)?;
    validate::length("last_name", last_name, 1, validate::MAX_STRING)
}
