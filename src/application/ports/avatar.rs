// src/application/ports/avatar.rs

/// Builds a placeholder avatar URL for users without a picture. The image
/// itself is rendered by an external service.
pub trait AvatarGenerator: Send + Sync {
    fn avatar_url(&self, display_name: &str) -> String;
}
