pub mod request;
pub mod response;

pub use request::{RefreshTokenRequest, RevokeTokenRequest};
pub use response::{RefreshTokenResponse, TokenPairResponse};
