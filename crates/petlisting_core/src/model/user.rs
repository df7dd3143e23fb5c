//! Owner model.
//!
//! Users are managed by the surrounding system; the pet core only needs to
//! resolve an owner by id.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a user row.
pub type UserId = i64;

/// Account that owns one or more pet listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
}
