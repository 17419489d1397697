//! Core message model shared by handlers and transport adapters.

pub mod chat;
pub mod convert;
pub mod message;
pub mod user;

pub use chat::Chat;
pub use convert::{ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use user::User;
