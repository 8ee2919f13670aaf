//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `BOOKSHELF_*` environment variables or matching CLI
//! flags. Everything has a fallback, so an empty environment starts the
//! service on the in-memory store.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSHELF")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Absent selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
}

/// Settings that could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return the database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("bookshelf")]).expect("config should load")
    }

    fn cleared() -> [(&'static str, Option<String>); 3] {
        [
            ("BOOKSHELF_BIND_ADDR", None),
            ("BOOKSHELF_DATABASE_URL", None),
            ("BOOKSHELF_POOL_MAX_SIZE", None),
        ]
    }

    #[rstest]
    fn defaults_are_used_when_missing() {
        let _guard = lock_env(cleared());

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:5000".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BOOKSHELF_BIND_ADDR", Some("127.0.0.1:8080".to_owned())),
            (
                "BOOKSHELF_DATABASE_URL",
                Some("postgres://localhost/books".to_owned()),
            ),
            ("BOOKSHELF_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            8080
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/books"));
        assert_eq!(settings.pool_max_size(), 4);
    }

    #[rstest]
    #[case(Some("   "))]
    #[case(None)]
    fn blank_database_url_selects_memory(#[case] url: Option<&str>) {
        let settings = AppSettings {
            bind_addr: None,
            database_url: url.map(str::to_owned),
            pool_max_size: None,
        };
        assert!(settings.database_url().is_none());
    }

    #[rstest]
    fn malformed_bind_addr_is_reported() {
        let settings = AppSettings {
            bind_addr: Some("nowhere".to_owned()),
            database_url: None,
            pool_max_size: None,
        };
        let error = settings.bind_addr().expect_err("invalid address");
        assert!(error.to_string().contains("nowhere"));
    }
}
