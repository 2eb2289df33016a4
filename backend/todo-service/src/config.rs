/// Configuration management for the to-do service
///
/// All configuration comes from environment variables, read once at startup.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Document store configuration
    pub database: DatabaseConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*"
    pub allowed_origins: String,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    pub url: String,
    /// Database name used when the connection string does not carry one
    pub name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            server: ServerConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("MONGODB_URI")
                    .map_err(|_| "MONGODB_URI must be set".to_string())?,
                name: std::env::var("MONGODB_DB").unwrap_or_else(|_| "social-todos".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_requires_database_url() {
        std::env::remove_var("MONGODB_URI");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("MONGODB_URI"));
    }

    #[test]
    #[serial]
    fn from_env_applies_defaults() {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("MONGODB_DB");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.name, "social-todos");
        assert_eq!(config.cors.allowed_origins, "*");

        std::env::remove_var("MONGODB_URI");
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        std::env::set_var("MONGODB_URI", "mongodb://db.internal:27017");
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("MONGODB_DB", "todos-prod");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://studio.example.com");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "mongodb://db.internal:27017");
        assert_eq!(config.database.name, "todos-prod");
        assert_eq!(config.cors.allowed_origins, "https://studio.example.com");

        for key in [
            "MONGODB_URI",
            "HOST",
            "PORT",
            "MONGODB_DB",
            "CORS_ALLOWED_ORIGINS",
        ] {
            std::env::remove_var(key);
        }
    }
}
