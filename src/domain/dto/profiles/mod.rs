pub mod request;
pub mod response;

pub use request::{AddEducationRequest, AddExperienceRequest, CreateProfileRequest};
pub use response::ProfileResponse;
