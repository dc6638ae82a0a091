pub mod request;
pub mod response;

pub use request::SendMessageRequest;
pub use response::{ConversationResponse, MessageResponse};
