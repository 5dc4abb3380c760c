use std::path::PathBuf;

use crate::common::ConfigError;

/// Runtime settings, read once at startup from the environment
/// (`.env` friendly via dotenvy).
///
/// The admin credentials default to the development pair; deployments
/// override them. All generated file URLs hang off `public_base_url` so
/// there is exactly one place the origin is configured.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub upload_dir: PathBuf,
    pub public_base_url: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            bind_addr: var_or("BIND_ADDR", "0.0.0.0:8080"),
            upload_dir: PathBuf::from(var_or("UPLOAD_DIR", "./uploads")),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            admin_email: var_or("ADMIN_EMAIL", "admin"),
            admin_password: var_or("ADMIN_PASSWORD", "admin"),
        })
    }

    /// Public URL for a stored upload. Relative when no base is configured.
    pub fn file_url(&self, stored_name: &str) -> String {
        format!("{}/uploads/{}", self.public_base_url, stored_name)
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
