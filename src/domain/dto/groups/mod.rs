pub mod request;
pub mod response;

pub use request::{AddManagerRequest, GroupRequest};
pub use response::{GroupResponse, MemberResponse};
