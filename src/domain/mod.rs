pub mod auth;
pub mod speech;
