pub mod user_store;
pub mod user_repo;

#[cfg(test)]
pub mod mock;

pub use user_repo::UserRepository;
pub use user_store::UserStore;
