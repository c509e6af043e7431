use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::domain::timestamp;

/// A user account. Accounts are created by the external auth service; this
/// crate only reads identity fields and appends progress.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
}

fn default_role() -> String {
    "user".to_string()
}

impl User {
    pub fn new(username: &str, email: &str) -> Self {
        User {
            id: None,
            username: username.to_string(),
            email: email.to_string(),
            is_admin: false,
            role: default_role(),
            progress: Vec::new(),
        }
    }
}

/// One completed quiz attempt, as embedded in the user document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub topic: String,
    pub score: f64,
    #[serde(with = "timestamp")]
    pub completed_at: DateTime<Utc>,
}

impl ProgressEntry {
    pub fn completed_now(topic: &str, score: f64) -> Self {
        ProgressEntry {
            topic: topic.to_string(),
            score,
            completed_at: Utc::now(),
        }
    }
}

/// The caller of a request, as resolved by the auth gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub role: String,
}

impl Identity {
    pub fn from_user(user: &User) -> Option<Self> {
        Some(Identity {
            id: user.id?,
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            role: user.role.clone(),
        })
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(username: &str) -> Self {
        let mut user = User::new(username, &format!("{}@example.com", username));
        user.id = Some(ObjectId::new());
        user
    }
}
