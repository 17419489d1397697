//! Membership store: per-chat opt-in lists and their Redis persistence.
//!
//! ## Modules
//!
//! - [`error`] – Store error types
//! - [`store`] – MembershipStore trait
//! - [`memory`] – InMemoryMembershipStore (tests, local runs)
//! - [`redis_store`] – RedisMembershipStore (Redis lists)
//! - [`config`] – StoreConfig loaded from env

mod config;
mod error;
mod memory;
mod redis_store;
mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::InMemoryMembershipStore;
pub use redis_store::RedisMembershipStore;
pub use store::MembershipStore;
