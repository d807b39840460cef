use std::sync::Arc;

use async_trait::async_trait;
use auth::PinValidator;

use crate::account::authenticator::Authenticator;
use crate::account::errors::AuthError;
use crate::account::models::LoginRequest;
use crate::account::models::Session;
use crate::doctor::models::DoctorView;
use crate::doctor::models::LicenseNumber;
use crate::doctor::models::NewDoctor;
use crate::doctor::models::RegisterDoctorRequest;
use crate::doctor::ports::DoctorRepository;
use crate::doctor::ports::DoctorServicePort;

/// Domain service implementation for doctor registration and login.
///
/// Registration is gated by the hospital PIN; a rejected PIN ends the request
/// before the store is consulted.
pub struct DoctorService<R>
where
    R: DoctorRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    pin_validator: PinValidator,
}

impl<R> DoctorService<R>
where
    R: DoctorRepository,
{
    /// Create a new doctor service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Doctor persistence implementation
    /// * `authenticator` - Shared password and token handling
    /// * `pin_validator` - Hospital PIN loaded from configuration
    pub fn new(
        repository: Arc<R>,
        authenticator: Arc<Authenticator>,
        pin_validator: PinValidator,
    ) -> Self {
        Self {
            repository,
            authenticator,
            pin_validator,
        }
    }
}

#[async_trait]
impl<R> DoctorServicePort for DoctorService<R>
where
    R: DoctorRepository,
{
    async fn register(
        &self,
        request: RegisterDoctorRequest,
    ) -> Result<Session<DoctorView>, AuthError> {
        let command = request.into_command()?;

        if !self.pin_validator.validate(&command.pin) {
            tracing::warn!("Doctor registration rejected: invalid hospital PIN");
            return Err(AuthError::InvalidPin);
        }

        let license_number = LicenseNumber::new(command.license_number)?;

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailExists);
        }

        if self
            .repository
            .find_by_license(&license_number)
            .await?
            .is_some()
        {
            return Err(AuthError::LicenseExists);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let doctor = self
            .repository
            .create(NewDoctor {
                name: command.name,
                phone_number: command.phone_number,
                email: command.email,
                specialization: command.specialization,
                password_hash,
                license_number,
            })
            .await
            .inspect_err(|e| {
                if let AuthError::Storage(detail) = e {
                    tracing::error!(error = %detail, "Failed to persist doctor");
                }
            })?;

        tracing::info!(doctor_id = %doctor.id, "Doctor registered");

        let token = self.authenticator.issue_token(&doctor)?;
        Ok(Session {
            principal: DoctorView::from(&doctor),
            token,
        })
    }

    async fn login(&self, request: LoginRequest) -> Result<Session<DoctorView>, AuthError> {
        let credentials = request.into_credentials()?;

        let found = self.repository.find_by_email(&credentials.email).await?;
        let doctor = self
            .authenticator
            .authenticate(found, &credentials.password)
            .inspect_err(|_| tracing::warn!("Doctor login rejected"))?;

        tracing::info!(doctor_id = %doctor.id, "Doctor logged in");

        let token = self.authenticator.issue_token(&doctor)?;
        Ok(Session {
            principal: DoctorView::from(&doctor),
            token,
        })
    }
}
