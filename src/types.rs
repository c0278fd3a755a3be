pub use crate::utils::database;
use crate::utils::logfile::LogFile;
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: Arc<database::DatabaseConnection>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub max_size: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub log: LogConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT number: {0}")]
    InvalidPort(String),
    #[error("Invalid LOG_FILE_MAX_SIZE: {0}")]
    InvalidLogFileMaxSize(String),
}

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILE: &str = "homeRecipesServer.log";
const DEFAULT_LOG_FILE_MAX_SIZE: u64 = 1000 * 1024;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let log_file = lookup("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let log_file_max_size = match lookup("LOG_FILE_MAX_SIZE") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidLogFileMaxSize(raw))?,
            None => DEFAULT_LOG_FILE_MAX_SIZE,
        };

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            log: LogConfig {
                file: (!log_file.trim().is_empty()).then(|| PathBuf::from(log_file)),
                max_size: log_file_max_size,
            },
        })
    }
}

impl LogConfig {
    /// Opens the configured log file, if any.
    pub fn open(&self) -> std::io::Result<Option<Arc<LogFile>>> {
        match &self.file {
            Some(path) => Ok(Some(Arc::new(LogFile::open(path, self.max_size)?))),
            None => Ok(None),
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            db_conn: Arc::new(database::DatabaseConnection::new()),
        }
    }
}
