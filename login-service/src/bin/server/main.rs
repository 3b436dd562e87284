use std::sync::Arc;

use auth::Sha256Scheme;
use login_service::config::Config;
use login_service::domain::login::service::LoginService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::repositories::PostgresClientProvider;
use login_service::outbound::repositories::PostgresUserProvider;
use login_service::outbound::tokens::JwtTokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "login-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        expose_error_details = config.server.expose_error_details,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

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

    let user_provider = Arc::new(PostgresUserProvider::new(pg_pool.clone()));
    let client_provider = Arc::new(PostgresClientProvider::new(
        pg_pool,
        Sha256Scheme::new(config.clients.password_salt.clone()),
    ));
    let token_issuer = Arc::new(JwtTokenIssuer::from_config(&config.jwt));

    let login_service = Arc::new(LoginService::new(
        user_provider,
        client_provider,
        token_issuer,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(login_service, config.server.expose_error_details);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}
