use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Fallback signing secret. Anything outside local development must set
/// `JWT_SECRET`.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

const DEFAULT_SERVICE_NAME: &str = "portal-service";

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub jwt: JwtConfig,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
}

impl PortalConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(PortalConfig {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
            jwt: JwtConfig::from_env(),
        })
    }

    /// True when the insecure fallback secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt.secret.expose_secret() == DEFAULT_JWT_SECRET
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
        }
    }

    fn from_env() -> Self {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Self::new(secret),
            _ => Self::new(DEFAULT_JWT_SECRET),
        }
    }
}
