//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Telegram handle without the `@`. Membership is keyed on this; users
    /// without one cannot opt in.
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
