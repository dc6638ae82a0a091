pub mod token_store;
pub mod token_repository;

#[cfg(test)]
pub mod mock;

pub use token_repository::RefreshTokenRepository;
pub use token_store::RefreshTokenStore;
