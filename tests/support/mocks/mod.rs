// tests/support/mocks/mod.rs
pub mod security;
pub mod time;
pub mod user_repo;

pub use security::*;
pub use time::*;
pub use user_repo::*;
