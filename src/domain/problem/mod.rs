pub mod model;
pub mod sink;

pub use model::{Extra, ExtraFields, ProblemResponse};
pub use sink::{ResponseSink, APPLICATION_PROBLEM_JSON};
