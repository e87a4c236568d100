pub mod auth;
pub mod identity;

pub use identity::IdentityResolver;
