// src/domain/user/mod.rs
pub mod cursor;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use cursor::UserListCursor;
pub use entity::{ProfileUpdate, User};
pub use repository::{UserRepository, UserWindow};
pub use value_objects::{UserId, Username};
