pub mod account;
pub mod doctor;
pub mod patient;
