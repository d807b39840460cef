use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PinValidator;
use auth::TokenIssuer;
use clinic_service::account::authenticator::Authenticator;
use clinic_service::account::errors::AuthError;
use clinic_service::account::models::PrincipalId;
use clinic_service::doctor::models::Doctor;
use clinic_service::doctor::models::LicenseNumber;
use clinic_service::doctor::models::NewDoctor;
use clinic_service::doctor::ports::DoctorRepository;
use clinic_service::doctor::service::DoctorService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::patient::models::NewPatient;
use clinic_service::patient::models::Patient;
use clinic_service::patient::ports::PatientRepository;
use clinic_service::patient::service::PatientService;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const HOSPITAL_PIN: &str = "1234";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub patients: Arc<InMemoryPatientRepository>,
    pub doctors: Arc<InMemoryDoctorRepository>,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let patients = Arc::new(InMemoryPatientRepository::default());
        let doctors = Arc::new(InMemoryDoctorRepository::default());

        let authenticator = Arc::new(
            Authenticator::new(TokenIssuer::new(JWT_SECRET).expect("Failed to build issuer"))
                .expect("Failed to build authenticator"),
        );

        let patient_service = Arc::new(PatientService::new(
            Arc::clone(&patients),
            Arc::clone(&authenticator),
        ));
        let doctor_service = Arc::new(DoctorService::new(
            Arc::clone(&doctors),
            Arc::clone(&authenticator),
            PinValidator::new(HOSPITAL_PIN),
        ));

        let router = create_router(patient_service, doctor_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            patients,
            doctors,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(JWT_SECRET).expect("Failed to build issuer"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

/// Patient store with the same uniqueness rules as the patients table.
#[derive(Default)]
pub struct InMemoryPatientRepository {
    rows: Mutex<Vec<Patient>>,
    unavailable: AtomicBool,
}

impl InMemoryPatientRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Patient> {
        self.rows.lock().unwrap().clone()
    }

    /// Make every following read and write fail as if the database were down.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AuthError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Storage("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, AuthError> {
        self.check_online()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.email == email).cloned())
    }

    async fn create(&self, patient: NewPatient) -> Result<Patient, AuthError> {
        self.check_online()?;

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.email == patient.email) {
            return Err(AuthError::EmailExists);
        }

        let created = patient.with_id(PrincipalId(rows.len() as i64 + 1));
        rows.push(created.clone());
        Ok(created)
    }
}

/// Doctor store with the same uniqueness rules as the doctors table.
#[derive(Default)]
pub struct InMemoryDoctorRepository {
    rows: Mutex<Vec<Doctor>>,
    unavailable: AtomicBool,
}

impl InMemoryDoctorRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Make every following read and write fail as if the database were down.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AuthError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Storage("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, AuthError> {
        self.check_online()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|d| d.email == email).cloned())
    }

    async fn find_by_license(
        &self,
        license_number: &LicenseNumber,
    ) -> Result<Option<Doctor>, AuthError> {
        self.check_online()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|d| &d.license_number == license_number)
            .cloned())
    }

    async fn create(&self, doctor: NewDoctor) -> Result<Doctor, AuthError> {
        self.check_online()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|d| d.email == doctor.email) {
            return Err(AuthError::EmailExists);
        }
        if rows.iter().any(|d| d.license_number == doctor.license_number) {
            return Err(AuthError::LicenseExists);
        }

        let created = doctor.with_id(PrincipalId(rows.len() as i64 + 1));
        rows.push(created.clone());
        Ok(created)
    }
}
