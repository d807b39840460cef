pub mod authenticator;
pub mod errors;
pub mod models;
