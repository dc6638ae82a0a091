pub mod conversations;
pub mod groups;
pub mod pagination;
pub mod posts;
pub mod profiles;
pub mod tokens;
pub mod users;
