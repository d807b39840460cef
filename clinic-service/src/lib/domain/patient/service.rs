use std::sync::Arc;

use async_trait::async_trait;

use crate::account::authenticator::Authenticator;
use crate::account::errors::AuthError;
use crate::account::models::LoginRequest;
use crate::account::models::Session;
use crate::patient::models::NewPatient;
use crate::patient::models::PatientView;
use crate::patient::models::RegisterPatientRequest;
use crate::patient::ports::PatientRepository;
use crate::patient::ports::PatientServicePort;

/// Domain service implementation for patient registration and login.
pub struct PatientService<R>
where
    R: PatientRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> PatientService<R>
where
    R: PatientRepository,
{
    /// Create a new patient service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Patient persistence implementation
    /// * `authenticator` - Shared password and token handling
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> PatientServicePort for PatientService<R>
where
    R: PatientRepository,
{
    async fn register(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<Session<PatientView>, AuthError> {
        let command = request.into_command()?;

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailExists);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let patient = self
            .repository
            .create(NewPatient {
                name: command.name,
                phone_number: command.phone_number,
                email: command.email,
                password_hash,
            })
            .await
            .inspect_err(|e| {
                if let AuthError::Storage(detail) = e {
                    tracing::error!(error = %detail, "Failed to persist patient");
                }
            })?;

        tracing::info!(patient_id = %patient.id, "Patient registered");

        let token = self.authenticator.issue_token(&patient)?;
        Ok(Session {
            principal: PatientView::from(&patient),
            token,
        })
    }

    async fn login(&self, request: LoginRequest) -> Result<Session<PatientView>, AuthError> {
        let credentials = request.into_credentials()?;

        let found = self.repository.find_by_email(&credentials.email).await?;
        let patient = self
            .authenticator
            .authenticate(found, &credentials.password)
            .inspect_err(|_| tracing::warn!("Patient login rejected"))?;

        tracing::info!(patient_id = %patient.id, "Patient logged in");

        let token = self.authenticator.issue_token(&patient)?;
        Ok(Session {
            principal: PatientView::from(&patient),
            token,
        })
    }
}
