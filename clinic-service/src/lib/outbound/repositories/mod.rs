pub mod doctor;
pub mod patient;

pub use doctor::PostgresDoctorRepository;
pub use patient::PostgresPatientRepository;

use crate::account::errors::AuthError;

/// Map a failed write to a domain error.
///
/// Unique violations are resolved by constraint name so a lost
/// check-then-create race surfaces as the same conflict as the pre-check.
fn write_error(e: sqlx::Error, constraints: &[(&str, AuthError)]) -> AuthError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            for (name, err) in constraints {
                if db_err.constraint() == Some(*name) {
                    return err.clone();
                }
            }
        }
    }
    AuthError::Storage(e.to_string())
}

fn storage_error(e: sqlx::Error) -> AuthError {
    AuthError::Storage(e.to_string())
}
