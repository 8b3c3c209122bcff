//! Record model and its JSON encoding.
//!
//! The backing file holds a single JSON array of [`User`] objects:
//!
//! ```text
//! [{"id":"1","email":"a@x.com","age":30},{"id":"2","email":"b@x.com","age":41}]
//! ```
//!
//! Encoding is compact and keeps the field order `id, email, age`, so a file
//! written by this crate is byte-stable across runs.

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

/// The full collection as stored on disk, in file order.
pub type UserList = Vec<User>;

pub fn decode_user(bytes: &[u8]) -> Result<User> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes the stored collection. An empty buffer is an empty collection.
pub fn decode_users(bytes: &[u8]) -> Result<UserList> {
    if bytes.is_empty() {
        return Ok(UserList::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_user(user: &User) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(user)?)
}

pub fn encode_users(users: &[User]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(users)?)
}
