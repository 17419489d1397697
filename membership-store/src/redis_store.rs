//! Redis-backed membership store.
//!
//! Each chat is one Redis list under `chat:{id}`; participants are list
//! entries in insertion order. Uses the store's native list operations
//! (`RPUSH`, `LREM`, `LRANGE`) — each call is atomic on the Redis side, but
//! check-then-act sequences are serialized by the handlers, not here.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::store::MembershipStore;

/// `MembershipStore` over a reconnecting Redis connection.
#[derive(Clone)]
pub struct RedisMembershipStore {
    conn: ConnectionManager,
}

impl RedisMembershipStore {
    /// Connects to Redis and verifies the connection with a `PING`.
    ///
    /// An unreachable store is a [`StoreError::Connection`] naming the
    /// configured endpoint; callers treat it as fatal at startup.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let endpoint = config.endpoint();
        info!(endpoint = %endpoint, "Connecting to the membership store");

        let client = redis::Client::open(config.connection_url()).map_err(|e| {
            StoreError::Connection {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            }
        })?;
        let mut conn =
            ConnectionManager::new(client)
                .await
                .map_err(|e| StoreError::Connection {
                    endpoint: endpoint.clone(),
                    message: e.to_string(),
                })?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await.map_err(|e| {
            StoreError::Connection {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            }
        })?;
        if pong != "PONG" {
            return Err(StoreError::Connection {
                endpoint,
                message: format!("unexpected PING reply: {}", pong),
            });
        }

        info!(endpoint = %endpoint, "Membership store connected");
        Ok(Self { conn })
    }

    fn key(chat_id: i64) -> String {
        format!("chat:{}", chat_id)
    }
}

#[async_trait]
impl MembershipStore for RedisMembershipStore {
    async fn is_member(&self, chat_id: i64, participant: &str) -> Result<bool, StoreError> {
        let members = self.list_members(chat_id).await?;
        Ok(members.iter().any(|m| m == participant))
    }

    async fn add_member(&self, chat_id: i64, participant: &str) -> Result<(), StoreError> {
        debug!(chat_id, participant, "Adding member");
        let mut conn = self.conn.clone();
        let _: () = conn.rpush(Self::key(chat_id), participant).await?;
        Ok(())
    }

    async fn remove_member(&self, chat_id: i64, participant: &str) -> Result<(), StoreError> {
        debug!(chat_id, participant, "Removing member");
        let mut conn = self.conn.clone();
        // count 0: remove every occurrence, not just the first.
        let _: () = conn.lrem(Self::key(chat_id), 0, participant).await?;
        Ok(())
    }

    async fn list_members(&self, chat_id: i64) -> Result<Vec<String>, StoreError> {
        let mut conn = self.conn.clone();
        let members: Vec<String> = conn.lrange(Self::key(chat_id), 0, -1).await?;
        Ok(members)
    }
}
