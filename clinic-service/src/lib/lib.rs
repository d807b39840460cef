pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::doctor;
pub use domain::patient;
pub use outbound::repositories;
