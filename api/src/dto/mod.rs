//! Request and response bodies for the HTTP endpoints

pub mod auth;

pub use auth::*;
