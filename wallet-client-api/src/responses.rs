use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::envelope::is_truthy;

/// Profile record of the signed-in user, kept exactly as the service sent it.
///
/// Only `is_admin` is interpreted. The key must be present for the record to
/// be accepted; a `null` or falsy value reads as a regular user. Every other
/// field passes through untouched, whatever its type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct UserProfile {
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for UserProfile {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if fields.contains_key("is_admin") {
            Ok(Self { fields })
        } else {
            Err("missing field `is_admin`".to_string())
        }
    }
}

impl From<UserProfile> for Map<String, Value> {
    fn from(profile: UserProfile) -> Self {
        profile.fields
    }
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.fields.get("is_admin").is_some_and(is_truthy)
    }

    /// Identifier rendered as text; the service sends strings or numbers.
    pub fn id(&self) -> Option<String> {
        match self.fields.get("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    pub fn phone(&self) -> Option<&str> {
        self.text("phone")
    }

    pub fn balance(&self) -> Option<f64> {
        self.fields.get("balance").and_then(Value::as_f64)
    }

    /// Raw access to any field of the record
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// `data` payload of a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginData {
    pub access_token: String,
    pub user: UserProfile,
}
