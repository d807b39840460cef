use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::models::LoginRequest;
use crate::account::models::Session;
use crate::doctor::models::Doctor;
use crate::doctor::models::DoctorView;
use crate::doctor::models::LicenseNumber;
use crate::doctor::models::NewDoctor;
use crate::doctor::models::RegisterDoctorRequest;

/// Port for doctor authentication operations.
#[async_trait]
pub trait DoctorServicePort: Send + Sync + 'static {
    /// Register a new doctor and open a session.
    ///
    /// # Errors
    /// * `MissingFields` - A required field is absent
    /// * `InvalidPin` - Hospital PIN rejected
    /// * `BadLicenseFormat` - License number is not 2 letters + 6 digits
    /// * `EmailExists` - Email is already registered to a doctor
    /// * `LicenseExists` - License number is already registered
    /// * `Storage` - Persistence failed
    async fn register(
        &self,
        request: RegisterDoctorRequest,
    ) -> Result<Session<DoctorView>, AuthError>;

    /// Authenticate a doctor by email and password.
    ///
    /// # Errors
    /// * `MissingCredentials` - Email or password absent or empty
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Storage` - Lookup failed
    async fn login(&self, request: LoginRequest) -> Result<Session<DoctorView>, AuthError>;
}

/// Persistence operations for doctors.
#[async_trait]
pub trait DoctorRepository: Send + Sync + 'static {
    /// Retrieve doctor by email address.
    ///
    /// # Errors
    /// * `Storage` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, AuthError>;

    /// Retrieve doctor by license number.
    ///
    /// # Errors
    /// * `Storage` - Database operation failed
    async fn find_by_license(
        &self,
        license_number: &LicenseNumber,
    ) -> Result<Option<Doctor>, AuthError>;

    /// Persist a new doctor atomically and assign its id.
    ///
    /// # Errors
    /// * `EmailExists` - The store's uniqueness constraint rejected the email
    /// * `LicenseExists` - The store's uniqueness constraint rejected the license
    /// * `Storage` - Database operation failed; nothing was written
    async fn create(&self, doctor: NewDoctor) -> Result<Doctor, AuthError>;
}
