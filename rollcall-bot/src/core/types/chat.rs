//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (group or private) identity; the unit of membership scoping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
