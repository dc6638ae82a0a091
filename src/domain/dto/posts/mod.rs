pub mod request;
pub mod response;

pub use request::{CreateCommentRequest, PostTextRequest};
pub use response::{CommentResponse, PostResponse};
