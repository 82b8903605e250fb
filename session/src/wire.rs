//! Response bodies of the authority contract.
//!
//! DESIGN
//! ======
//! One lenient shape covers `/logged_in`, `/login` and `/users`: each endpoint
//! only sets some of the fields, and the caller's success predicate decides
//! which ones matter.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::ErrorSet;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthBody {
    #[serde(default)]
    pub logged_in: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_errors")]
    pub errors: ErrorSet,
}

impl AuthBody {
    /// Decode a body, treating `null` (empty response) as an empty object.
    pub(crate) fn parse(body: &Value) -> Result<Self, serde_json::Error> {
        if body.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(body)
    }
}

/// Accept `["a", "b"]`, a bare `"a"`, or `null`.
fn deserialize_errors<'de, D>(deserializer: D) -> Result<ErrorSet, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Many(messages)) => ErrorSet::from(messages),
        Some(Raw::One(message)) => ErrorSet::from(vec![message]),
        None => ErrorSet::new(),
    })
}
