//! Web server configuration

use crate::env::{EnvError, EnvResult, EnvVar};

/// MongoDB configuration
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub connection_string: String,
    pub database_name: String,
    pub collection_name: String,
}

impl MongoConfig {
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::mongodb;

        Ok(Self {
            connection_string: mongodb::ConnectionString::get()?,
            database_name: mongodb::DatabaseName::get()?,
            collection_name: mongodb::CollectionName::get()?,
        })
    }

    pub fn validate(&self) -> EnvResult<()> {
        if self.connection_string.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_URL".to_string(),
                message: "Connection string cannot be empty".to_string(),
            });
        }

        if self.database_name.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_DATABASE".to_string(),
                message: "Database name cannot be empty".to_string(),
            });
        }

        if self.collection_name.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_COLLECTION".to_string(),
                message: "Collection name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load MongoDB config from environment: {}. Using defaults.",
                e
            );
            Self {
                connection_string: "mongodb://localhost:27017".to_string(),
                database_name: "byfood".to_string(),
                collection_name: "books".to_string(),
            }
        })
    }
}

/// Web server configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Absent means no database; the server falls back to the in-memory
    /// book store.
    pub mongo_config: Option<MongoConfig>,
}

impl WebConfig {
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::web;

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            mongo_config: Some(MongoConfig::from_env()?),
        })
    }

    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError {
                variable: "BYFOOD_WEB_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "BYFOOD_WEB_PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if let Some(ref mongo_config) = self.mongo_config {
            mongo_config.validate()?;
        }

        Ok(())
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn is_development(&self) -> bool {
        use crate::env::core;
        core::Mode::get()
            .map(|mode| mode == "development")
            .unwrap_or(false)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load web config from environment: {}. Using defaults.",
                e
            );
            Self {
                bind_addr: "127.0.0.1".to_string(),
                port: 8080,
                mongo_config: Some(MongoConfig::default()),
            }
        })
    }
}
