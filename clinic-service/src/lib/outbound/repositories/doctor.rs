use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::storage_error;
use super::write_error;
use crate::account::errors::AuthError;
use crate::account::errors::LicenseNumberError;
use crate::account::models::PrincipalId;
use crate::doctor::models::Doctor;
use crate::doctor::models::LicenseNumber;
use crate::doctor::models::NewDoctor;
use crate::doctor::ports::DoctorRepository;

const UNIQUE_CONSTRAINTS: [(&str, AuthError); 2] = [
    ("doctors_email_key", AuthError::EmailExists),
    ("doctors_license_number_key", AuthError::LicenseExists),
];

pub struct PostgresDoctorRepository {
    pool: PgPool,
}

impl PostgresDoctorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct DoctorRow {
    id: i64,
    name: String,
    phone_number: String,
    email: String,
    specialization: String,
    password_hash: String,
    license_number: String,
}

impl TryFrom<DoctorRow> for Doctor {
    type Error = LicenseNumberError;

    fn try_from(r: DoctorRow) -> Result<Self, Self::Error> {
        Ok(Doctor {
            id: PrincipalId(r.id),
            name: r.name,
            phone_number: r.phone_number,
            email: r.email,
            specialization: r.specialization,
            password_hash: r.password_hash,
            license_number: LicenseNumber::new(r.license_number)?,
        })
    }
}

fn into_doctor(row: Option<DoctorRow>) -> Result<Option<Doctor>, AuthError> {
    row.map(Doctor::try_from)
        .transpose()
        .map_err(|e| AuthError::Storage(format!("corrupt doctor row: {}", e)))
}

#[async_trait]
impl DoctorRepository for PostgresDoctorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, AuthError> {
        let row = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT id, name, phone_number, email, specialization, password_hash, license_number
            FROM doctors
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        into_doctor(row)
    }

    async fn find_by_license(
        &self,
        license_number: &LicenseNumber,
    ) -> Result<Option<Doctor>, AuthError> {
        let row = sqlx::query_as::<_, DoctorRow>(
            r#"
            SELECT id, name, phone_number, email, specialization, password_hash, license_number
            FROM doctors
            WHERE license_number = $1
            "#,
        )
        .bind(license_number.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        into_doctor(row)
    }

    async fn create(&self, doctor: NewDoctor) -> Result<Doctor, AuthError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO doctors
                (name, phone_number, email, specialization, password_hash, license_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&doctor.name)
        .bind(&doctor.phone_number)
        .bind(&doctor.email)
        .bind(&doctor.specialization)
        .bind(&doctor.password_hash)
        .bind(doctor.license_number.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, &UNIQUE_CONSTRAINTS))?;

        tx.commit().await.map_err(storage_error)?;

        Ok(doctor.with_id(PrincipalId(id)))
    }
}
