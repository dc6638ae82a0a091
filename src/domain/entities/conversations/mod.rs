pub mod conversation;

pub use conversation::{Conversation, Message};
