use crate::error::{AppError, AppResult};
use crate::infrastructure::env::{EnvReader, SystemEnv};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Prefix for the `type` URI of problems emitted by the server.
    pub problem_type_base: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_reader(&SystemEnv)
    }

    pub fn from_reader<E: EnvReader + ?Sized>(env: &E) -> AppResult<Self> {
        let port = env.get_or("PORT", "8080");

        let config = Config {
            host: env.get_or("HOST", "0.0.0.0"),
            port: port
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got {port:?}")))?,
            environment: match env.get_or("ENVIRONMENT", "development").as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env.get_or("LOG_FORMAT", "pretty").as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            problem_type_base: env
                .get_or("PROBLEM_TYPE_BASE", "/problems")
                .trim_end_matches('/')
                .to_string(),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Full `type` URI for the problem kind `slug`.
    pub fn problem_type(&self, slug: &str) -> String {
        format!("{}/{}", self.problem_type_base, slug)
    }
}
