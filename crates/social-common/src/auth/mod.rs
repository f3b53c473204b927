//! Authentication utilities

mod identity;
mod jwt;

pub use identity::{
    authenticator_from_config, Authenticator, JwtAuthenticator, RemoteAuthenticator,
    CURRENT_USER_PATH,
};
pub use jwt::{Claims, JwtService};
