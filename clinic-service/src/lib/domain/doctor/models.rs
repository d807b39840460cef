use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::account::errors::AuthError;
use crate::account::errors::LicenseNumberError;
use crate::account::models::Principal;
use crate::account::models::PrincipalId;

/// Doctor aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: PrincipalId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub specialization: String,
    pub password_hash: String,
    pub license_number: LicenseNumber,
}

impl Principal for Doctor {
    const ROLE: Option<&'static str> = Some("doctor");

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

/// Medical license number value type
///
/// Exactly two ASCII letters (either case) followed by exactly six ASCII
/// digits. Stored as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LicenseNumber(String);

impl LicenseNumber {
    const LETTERS: usize = 2;
    const DIGITS: usize = 6;

    /// Create a validated license number.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not two letters followed by six digits
    pub fn new(license_number: String) -> Result<Self, LicenseNumberError> {
        if Self::is_valid(&license_number) {
            Ok(Self(license_number))
        } else {
            Err(LicenseNumberError::InvalidFormat(license_number))
        }
    }

    /// Format check without constructing a value.
    pub fn is_valid(candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        bytes.len() == Self::LETTERS + Self::DIGITS
            && bytes[..Self::LETTERS].iter().all(u8::is_ascii_alphabetic)
            && bytes[Self::LETTERS..].iter().all(u8::is_ascii_digit)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicenseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Doctor fields ready for persistence; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub specialization: String,
    pub password_hash: String,
    pub license_number: LicenseNumber,
}

impl NewDoctor {
    pub fn with_id(self, id: PrincipalId) -> Doctor {
        Doctor {
            id,
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
            specialization: self.specialization,
            password_hash: self.password_hash,
            license_number: self.license_number,
        }
    }
}

/// Raw doctor registration payload.
///
/// A field is missing when absent or null; empty strings count as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterDoctorRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub password: Option<String>,
    pub pin: Option<String>,
    pub license_number: Option<String>,
}

/// Registration with every required field present. The license number is
/// not yet format-checked.
#[derive(Debug)]
pub struct RegisterDoctorCommand {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub specialization: String,
    pub password: String,
    pub pin: String,
    pub license_number: String,
}

impl RegisterDoctorRequest {
    /// # Errors
    /// * `MissingFields` - Any required field is absent
    pub fn into_command(self) -> Result<RegisterDoctorCommand, AuthError> {
        let missing = || AuthError::MissingFields;

        Ok(RegisterDoctorCommand {
            name: self.name.ok_or_else(missing)?,
            phone_number: self.phone_number.ok_or_else(missing)?,
            email: self.email.ok_or_else(missing)?,
            specialization: self.specialization.ok_or_else(missing)?,
            password: self.password.ok_or_else(missing)?,
            pin: self.pin.ok_or_else(missing)?,
            license_number: self.license_number.ok_or_else(missing)?,
        })
    }
}

/// Public projection of a doctor. Has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorView {
    pub id: PrincipalId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub specialization: String,
    pub license_number: LicenseNumber,
}

impl From<&Doctor> for DoctorView {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            phone_number: doctor.phone_number.clone(),
            email: doctor.email.clone(),
            specialization: doctor.specialization.clone(),
            license_number: doctor.license_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_number_valid() {
        assert!(LicenseNumber::is_valid("AB123456"));
        assert!(LicenseNumber::is_valid("ab123456"));
        assert!(LicenseNumber::is_valid("Xy000000"));
    }

    #[test]
    fn test_license_number_invalid() {
        assert!(!LicenseNumber::is_valid("A1234567"));
        assert!(!LicenseNumber::is_valid("AB12345"));
        assert!(!LicenseNumber::is_valid("AB1234567"));
        assert!(!LicenseNumber::is_valid("ABC12345"));
        assert!(!LicenseNumber::is_valid("12345678"));
        assert!(!LicenseNumber::is_valid(" AB123456"));
        assert!(!LicenseNumber::is_valid("AB123456\n"));
        assert!(!LicenseNumber::is_valid(""));
        // Non-ASCII letters and digits are rejected
        assert!(!LicenseNumber::is_valid("ÄB123456"));
        assert!(!LicenseNumber::is_valid("AB12345٣"));
    }

    #[test]
    fn test_license_number_new_keeps_case() {
        let license = LicenseNumber::new("ab123456".to_string()).unwrap();
        assert_eq!(license.as_str(), "ab123456");

        assert_eq!(
            LicenseNumber::new("AB12".to_string()),
            Err(LicenseNumberError::InvalidFormat("AB12".to_string()))
        );
    }

    #[test]
    fn test_into_command_missing_pin() {
        let request = RegisterDoctorRequest {
            name: Some("Gregory House".into()),
            phone_number: Some("55500000".into()),
            email: Some("house@example.com".into()),
            specialization: Some("Diagnostics".into()),
            password: Some("vicodin".into()),
            pin: None,
            license_number: Some("NJ123456".into()),
        };

        assert!(matches!(
            request.into_command(),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn test_view_excludes_password_hash() {
        let doctor = Doctor {
            id: PrincipalId(4),
            name: "Gregory House".into(),
            phone_number: "55500000".into(),
            email: "house@example.com".into(),
            specialization: "Diagnostics".into(),
            password_hash: "$argon2id$secret".into(),
            license_number: LicenseNumber::new("NJ123456".into()).unwrap(),
        };

        let json = serde_json::to_value(DoctorView::from(&doctor)).unwrap();
        assert_eq!(json["license_number"], "NJ123456");
        assert_eq!(json["specialization"], "Diagnostics");
        assert!(json.get("password_hash").is_none());
    }
}
