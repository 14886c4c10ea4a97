use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webblog_storage::{LocalStore, ObjectStore, S3Store};

use webblog_api::auth::password::hash_password;
use webblog_api::config::{ServerConfig, StorageConfig};
use webblog_api::router::build_app_router;
use webblog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webblog_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = webblog_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    webblog_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    webblog_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Author account ---
    let author_hash = resolve_author_password_hash(&config);
    let author = webblog_db::repositories::UserRepo::ensure_author(
        &pool,
        &config.author.username,
        &config.author.mail,
        &author_hash,
    )
    .await
    .expect("Failed to provision author account");
    tracing::info!(username = %author.username, "Author account ready");

    // --- Object storage ---
    let store = build_object_store(&config.storage).await;

    // --- App state & router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolve the author's password hash from configuration.
///
/// A pre-hashed value wins; otherwise a plaintext `AUTHOR_PASSWORD` is
/// hashed at startup. Having neither is a configuration error.
fn resolve_author_password_hash(config: &ServerConfig) -> String {
    if let Some(hash) = &config.author.password_hash {
        return hash.clone();
    }
    let password = config
        .author
        .password
        .as_deref()
        .expect("Either AUTHOR_PASSWORD_HASH or AUTHOR_PASSWORD must be set");
    hash_password(password).expect("Failed to hash AUTHOR_PASSWORD")
}

/// Construct the object-storage backend selected by configuration.
async fn build_object_store(config: &StorageConfig) -> Arc<dyn ObjectStore> {
    match config {
        StorageConfig::S3 {
            bucket,
            region,
            endpoint,
        } => {
            tracing::info!(bucket = %bucket, region = %region, "Using S3 object storage");
            Arc::new(S3Store::connect(bucket, region, endpoint.as_deref()).await)
        }
        StorageConfig::Local {
            base_dir,
            public_base,
        } => {
            tracing::info!(base_dir = %base_dir, "Using local object storage");
            Arc::new(LocalStore::new(base_dir.clone(), public_base.clone()))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
