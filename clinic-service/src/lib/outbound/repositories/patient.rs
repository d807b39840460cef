use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::storage_error;
use super::write_error;
use crate::account::errors::AuthError;
use crate::account::models::PrincipalId;
use crate::patient::models::NewPatient;
use crate::patient::models::Patient;
use crate::patient::ports::PatientRepository;

pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PatientRow {
    id: i64,
    name: String,
    phone_number: String,
    email: String,
    password_hash: String,
}

impl From<PatientRow> for Patient {
    fn from(r: PatientRow) -> Self {
        Patient {
            id: PrincipalId(r.id),
            name: r.name,
            phone_number: r.phone_number,
            email: r.email,
            password_hash: r.password_hash,
        }
    }
}

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, AuthError> {
        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT id, name, phone_number, email, password_hash
            FROM patients
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Patient::from))
    }

    async fn create(&self, patient: NewPatient) -> Result<Patient, AuthError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO patients (name, phone_number, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&patient.name)
        .bind(&patient.phone_number)
        .bind(&patient.email)
        .bind(&patient.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, &[("patients_email_key", AuthError::EmailExists)]))?;

        // Dropping an uncommitted transaction rolls it back
        tx.commit().await.map_err(storage_error)?;

        Ok(patient.with_id(PrincipalId(id)))
    }
}
