pub mod auth;
pub mod pagination;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use pagination::CursorPage;
pub use users::{ProfileDto, SidebarUserDto, UserDto};
