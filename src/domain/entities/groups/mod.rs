pub mod group;

pub use group::{Group, Manager, ManagerRole, Member};
