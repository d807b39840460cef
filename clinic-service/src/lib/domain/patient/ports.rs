use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::models::LoginRequest;
use crate::account::models::Session;
use crate::patient::models::NewPatient;
use crate::patient::models::Patient;
use crate::patient::models::PatientView;
use crate::patient::models::RegisterPatientRequest;

/// Port for patient authentication operations.
#[async_trait]
pub trait PatientServicePort: Send + Sync + 'static {
    /// Register a new patient and open a session.
    ///
    /// # Errors
    /// * `MissingFields` - A required field is absent
    /// * `EmailExists` - Email is already registered to a patient
    /// * `Storage` - Persistence failed
    async fn register(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<Session<PatientView>, AuthError>;

    /// Authenticate a patient by email and password.
    ///
    /// # Errors
    /// * `MissingCredentials` - Email or password absent or empty
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Storage` - Lookup failed
    async fn login(&self, request: LoginRequest) -> Result<Session<PatientView>, AuthError>;
}

/// Persistence operations for patients.
#[async_trait]
pub trait PatientRepository: Send + Sync + 'static {
    /// Retrieve patient by email address.
    ///
    /// # Returns
    /// Optional patient entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, AuthError>;

    /// Persist a new patient atomically and assign its id.
    ///
    /// # Errors
    /// * `EmailExists` - The store's uniqueness constraint rejected the email
    /// * `Storage` - Database operation failed; nothing was written
    async fn create(&self, patient: NewPatient) -> Result<Patient, AuthError>;
}
