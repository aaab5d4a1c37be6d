use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from database
///
/// `password` is whatever the web layer stored; hashing happens upstream.
/// It is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Payload for registering a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
