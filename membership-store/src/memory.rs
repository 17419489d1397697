//! In-memory membership store. Same semantics as the Redis store; used by
//! tests and local runs without a Redis instance.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::MembershipStore;

/// `MembershipStore` backed by a `HashMap` of chat id → ordered member list.
#[derive(Default)]
pub struct InMemoryMembershipStore {
    chats: RwLock<HashMap<i64, Vec<String>>>,
}

impl InMemoryMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipStore for InMemoryMembershipStore {
    async fn is_member(&self, chat_id: i64, participant: &str) -> Result<bool, StoreError> {
        let chats = self.chats.read().await;
        Ok(chats
            .get(&chat_id)
            .is_some_and(|members| members.iter().any(|m| m == participant)))
    }

    async fn add_member(&self, chat_id: i64, participant: &str) -> Result<(), StoreError> {
        let mut chats = self.chats.write().await;
        chats
            .entry(chat_id)
            .or_default()
            .push(participant.to_string());
        Ok(())
    }

    async fn remove_member(&self, chat_id: i64, participant: &str) -> Result<(), StoreError> {
        let mut chats = self.chats.write().await;
        if let Some(members) = chats.get_mut(&chat_id) {
            members.retain(|m| m != participant);
        }
        Ok(())
    }

    async fn list_members(&self, chat_id: i64) -> Result<Vec<String>, StoreError> {
        let chats = self.chats.read().await;
        Ok(chats.get(&chat_id).cloned().unwrap_or_default())
    }
}
