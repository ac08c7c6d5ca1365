pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::problem::{ProblemResponse, ResponseSink, APPLICATION_PROBLEM_JSON};
pub use error::{AppError, AppResult};
pub use infrastructure::env::{getenv, EnvReader, MapEnv, SystemEnv};
