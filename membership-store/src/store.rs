//! The `MembershipStore` trait: who has opted in, per chat.

use async_trait::async_trait;

use crate::error::StoreError;

/// Durable mapping from a chat to the ordered list of opted-in participants.
///
/// Participants are stored as list entries in insertion order; a chat that was
/// never written to behaves like an empty list. `add_member` appends without
/// checking for duplicates — keeping the list duplicate-free is the caller's
/// contract (handlers check `is_member` first, under a per-chat lock).
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// True iff `participant` currently appears in the chat's list.
    /// Unknown chats are not an error; they simply contain nobody.
    async fn is_member(&self, chat_id: i64, participant: &str) -> Result<bool, StoreError>;

    /// Appends `participant` to the chat's list.
    async fn add_member(&self, chat_id: i64, participant: &str) -> Result<(), StoreError>;

    /// Removes all occurrences of `participant` from the chat's list.
    /// No-op if the participant is absent.
    async fn remove_member(&self, chat_id: i64, participant: &str) -> Result<(), StoreError>;

    /// Current list for the chat, insertion order preserved.
    /// Empty for unknown chats.
    async fn list_members(&self, chat_id: i64) -> Result<Vec<String>, StoreError>;
}
