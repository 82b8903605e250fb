//! Session data model shared by every front end.
//!
//! DESIGN
//! ======
//! `Session` cannot represent "logged in without a user": the logged-in flag
//! is derived from whether a `UserSummary` is present, and a summary can only
//! be built from a non-empty JSON object.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Opaque user payload returned by the remote authority.
///
/// The client never looks inside it; it is stored and handed back to views
/// exactly as the server sent it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserSummary(Value);

impl UserSummary {
    /// Wrap a server payload. Only a non-empty JSON object is a user;
    /// `null`, `{}`, scalars and arrays are rejected.
    #[must_use]
    pub fn new(value: Value) -> Option<Self> {
        match &value {
            Value::Object(map) if !map.is_empty() => Some(Self(value)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserSummary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| D::Error::custom("user summary must be a non-empty object"))
    }
}

impl fmt::Display for UserSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-held belief about the current authentication status.
///
/// Replaced wholesale on every login, logout, or probe result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserSummary>,
}

impl Session {
    /// The logged-out session.
    #[must_use]
    pub const fn empty() -> Self {
        Self { user: None }
    }

    /// A logged-in session for `user`.
    #[must_use]
    pub const fn authenticated(user: UserSummary) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub const fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserSummary> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn into_user(self) -> Option<UserSummary> {
        self.user
    }
}

impl Serialize for Session {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Session", 2)?;
        state.serialize_field("logged_in", &self.logged_in())?;
        state.serialize_field("user", &self.user)?;
        state.end()
    }
}

/// Field values of a login or signup form at the moment of submission.
///
/// Serializes to the request body expected by `/login` and `/users`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CredentialForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

impl CredentialForm {
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            password_confirmation: None,
        }
    }

    #[must_use]
    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(confirmation.into());
        self
    }

    /// Reset every field, keeping whether a confirmation field exists.
    pub fn clear(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        if let Some(confirmation) = self.password_confirmation.as_mut() {
            confirmation.clear();
        }
    }
}

// Passwords never reach logs.
impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field(
                "password_confirmation",
                &self.password_confirmation.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Ordered messages explaining why the server rejected a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(Vec<String>);

impl ErrorSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<String>> for ErrorSet {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl<S: Into<String>> FromIterator<S> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}
