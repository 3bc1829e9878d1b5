// src/application/ports/mod.rs
pub mod avatar;
pub mod security;
pub mod time;
