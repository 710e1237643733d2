//! Typed environment variable access
//!
//! Every variable the service reads is declared here with its name,
//! default and parse rule, so configuration mistakes surface as one
//! uniform error type instead of scattered `env::var` calls.

use std::env;
use std::fmt;

/// Environment variable parse/lookup error.
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// Declarative accessor for a single environment variable.
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// Core service variables
pub mod core {
    use super::*;

    /// Application run mode
    pub struct Mode;
    impl EnvVar<String> for Mode {
        const NAME: &'static str = "BYFOOD_MODE";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Application mode: development, staging, production";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("production".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "development" | "dev" => Ok("development".to_string()),
                "staging" | "stage" => Ok("staging".to_string()),
                "production" | "prod" => Ok("production".to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid mode '{}'. Use: development, staging, production",
                        value
                    ),
                }),
            }
        }
    }

    /// Log level for the tracing subscriber
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "BYFOOD_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// Web server variables
pub mod web {
    use super::*;

    /// Bind address
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "BYFOOD_WEB_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Address the web server binds to";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            if value.trim().is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Bind address cannot be empty".to_string(),
                });
            }
            Ok(value.trim().to_string())
        }
    }

    /// Listen port
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "BYFOOD_WEB_PORT";
        const DEFAULT: Option<u16> = Some(8080);
        const DESCRIPTION: &'static str = "Port the web server listens on";

        fn parse(value: &str) -> EnvResult<u16> {
            value.parse::<u16>().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: format!("Invalid port number '{}'", value),
            })
        }
    }
}

/// MongoDB variables
pub mod mongodb {
    use super::*;

    /// Connection string
    pub struct ConnectionString;
    impl EnvVar<String> for ConnectionString {
        const NAME: &'static str = "MONGODB_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB connection string";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("mongodb://localhost:27017".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            if value.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Connection string cannot be empty".to_string(),
                });
            }
            Ok(value.to_string())
        }
    }

    /// Database name
    pub struct DatabaseName;
    impl EnvVar<String> for DatabaseName {
        const NAME: &'static str = "MONGODB_DATABASE";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB database name";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("byfood".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }

    /// Collection holding book documents
    pub struct CollectionName;
    impl EnvVar<String> for CollectionName {
        const NAME: &'static str = "MONGODB_COLLECTION";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB collection for book records";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("books".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.to_string())
        }
    }
}
