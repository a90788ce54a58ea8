//! Authentication: login/register endpoints and the explicit [`Session`]
//! value handed to API clients.

pub mod client;
pub mod models;

pub use client::AuthClient;
pub use models::{RegisterRequest, Role, Session, SessionExpired, UserRoleResponse};
