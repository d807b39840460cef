use serde::Deserialize;
use serde::Serialize;

use crate::account::errors::AuthError;
use crate::account::models::Principal;
use crate::account::models::PrincipalId;

/// Patient aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: PrincipalId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password_hash: String,
}

impl Principal for Patient {
    const ROLE: Option<&'static str> = None;

    fn id(&self) -> PrincipalId {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Patient fields ready for persistence; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password_hash: String,
}

impl NewPatient {
    pub fn with_id(self, id: PrincipalId) -> Patient {
        Patient {
            id,
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

/// Raw patient registration payload.
///
/// A field is missing when absent or null; empty strings count as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterPatientRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration with every required field present.
#[derive(Debug)]
pub struct RegisterPatientCommand {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

impl RegisterPatientRequest {
    /// # Errors
    /// * `MissingFields` - Any required field is absent
    pub fn into_command(self) -> Result<RegisterPatientCommand, AuthError> {
        match (self.name, self.phone_number, self.email, self.password) {
            (Some(name), Some(phone_number), Some(email), Some(password)) => {
                Ok(RegisterPatientCommand {
                    name,
                    phone_number,
                    email,
                    password,
                })
            }
            _ => Err(AuthError::MissingFields),
        }
    }
}

/// Public projection of a patient. Has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientView {
    pub id: PrincipalId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl From<&Patient> for PatientView {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name.clone(),
            phone_number: patient.phone_number.clone(),
            email: patient.email.clone(),
        }
    }
}
