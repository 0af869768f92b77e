//! Startup configuration loaded from environment variables.
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite:data.db?mode=rwc`)
//! - `ADMIN_EMAIL` - Default administrator email (default: `admin@example.com`)
//! - `ADMIN_PASSWORD` - Default administrator password (default: `changeme123`)
//!
//! Empty values are treated the same as unset ones.

use std::{env, path::PathBuf};

use secrecy::SecretString;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data.db?mode=rwc";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "changeme123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub admin: AdminCredentials,
}

/// Credentials for the administrator ensured at bootstrap.
///
/// The password is a [`SecretString`], so `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: SecretString,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            admin: AdminCredentials {
                email: var_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
                password: SecretString::from(var_or("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD)),
            },
        }
    }
}

/// Message worth logging for a `.env` load attempt. A missing file is not one.
pub fn dotenv_warning(result: &dotenvy::Result<PathBuf>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("ignoring unreadable .env file: {}", e)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.admin.email, "admin@example.com");
        assert_eq!(config.admin.password.expose_secret(), "changeme123");
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("ADMIN_EMAIL", "ops@example.com"),
            ("ADMIN_PASSWORD", "S3cret!"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.admin.email, "ops@example.com");
        assert_eq!(config.admin.password.expose_secret(), "S3cret!");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = config_from(&[("ADMIN_EMAIL", ""), ("ADMIN_PASSWORD", "")]);
        assert_eq!(config.admin.email, DEFAULT_ADMIN_EMAIL);
        assert_eq!(config.admin.password.expose_secret(), DEFAULT_ADMIN_PASSWORD);
    }

    #[test]
    fn test_dotenv_warning_skips_missing_file() {
        let missing = Err(dotenvy::Error::Io(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        )));
        assert_eq!(dotenv_warning(&missing), None);
        assert_eq!(dotenv_warning(&Ok(PathBuf::from(".env"))), None);
    }

    #[test]
    fn test_dotenv_warning_reports_malformed_file() {
        let malformed = Err(dotenvy::Error::LineParse("ADMIN_EMAIL".to_string(), 11));
        let warning = dotenv_warning(&malformed).expect("malformed file is reported");
        assert!(warning.starts_with("ignoring unreadable .env file: "));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = config_from(&[("ADMIN_PASSWORD", "S3cret!")]);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("S3cret!"));
        assert!(debug.contains("admin@example.com"));
    }
}
