use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8081`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Author account credentials provisioned at startup.
    pub author: AuthorConfig,
    /// Object storage backend selection.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8081`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8081".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            author: AuthorConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

/// The single author account, provisioned into the database at startup.
#[derive(Debug, Clone)]
pub struct AuthorConfig {
    pub username: String,
    pub mail: String,
    /// Pre-hashed Argon2id PHC string, if provided.
    pub password_hash: Option<String>,
    /// Plaintext password, hashed at startup. Only consulted when
    /// `password_hash` is absent.
    pub password: Option<String>,
}

impl AuthorConfig {
    /// Load author credentials from environment variables.
    ///
    /// | Env Var                | Required            | Default     |
    /// |------------------------|---------------------|-------------|
    /// | `AUTHOR_USERNAME`      | no                  | `author`    |
    /// | `AUTHOR_MAIL`          | no                  | `author@localhost` |
    /// | `AUTHOR_PASSWORD_HASH` | one of hash/password| --          |
    /// | `AUTHOR_PASSWORD`      | one of hash/password| --          |
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("AUTHOR_USERNAME").unwrap_or_else(|_| "author".into()),
            mail: std::env::var("AUTHOR_MAIL").unwrap_or_else(|_| "author@localhost".into()),
            password_hash: std::env::var("AUTHOR_PASSWORD_HASH").ok(),
            password: std::env::var("AUTHOR_PASSWORD").ok(),
        }
    }
}

/// Object storage backend selection, mirroring the deployment options:
/// an S3-compatible bucket in production, a local directory in development.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    S3 {
        bucket: String,
        region: String,
        /// Endpoint override for S3-compatible providers.
        endpoint: Option<String>,
    },
    Local {
        base_dir: String,
        public_base: String,
    },
}

impl StorageConfig {
    /// Load storage settings from environment variables.
    ///
    /// `STORAGE_BACKEND` selects `s3` or `local` (default `local`).
    /// The s3 backend requires `S3_BUCKET`; `S3_REGION` defaults to
    /// `us-east-1` and `S3_ENDPOINT` is optional.
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend or a missing `S3_BUCKET`, which is the
    /// desired behaviour -- we want misconfiguration to fail fast.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        match backend.as_str() {
            "s3" => StorageConfig::S3 {
                bucket: std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into()),
                endpoint: std::env::var("S3_ENDPOINT").ok(),
            },
            "local" => StorageConfig::Local {
                base_dir: std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "storage/uploads".into()),
                public_base: std::env::var("UPLOADS_PUBLIC_BASE")
                    .unwrap_or_else(|_| "/uploads".into()),
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be one of: s3, local"),
        }
    }
}
