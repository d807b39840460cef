use std::sync::Arc;

use auth::PinValidator;
use auth::TokenIssuer;
use clinic_service::account::authenticator::Authenticator;
use clinic_service::config::Config;
use clinic_service::doctor::service::DoctorService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::patient::service::PatientService;
use clinic_service::repositories::PostgresDoctorRepository;
use clinic_service::repositories::PostgresPatientRepository;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "clinic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    // Secrets are read once here and never again
    let token_issuer = TokenIssuer::new(config.jwt.secret.expose_secret().as_bytes())?;
    let authenticator = Arc::new(Authenticator::new(token_issuer)?);
    let pin_validator = PinValidator::new(config.hospital.pin.expose_secret().as_str());

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let patient_service = Arc::new(PatientService::new(
        Arc::new(PostgresPatientRepository::new(pg_pool.clone())),
        Arc::clone(&authenticator),
    ));
    let doctor_service = Arc::new(DoctorService::new(
        Arc::new(PostgresDoctorRepository::new(pg_pool)),
        Arc::clone(&authenticator),
        pin_validator,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(patient_service, doctor_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
