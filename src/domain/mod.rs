mod expectation;
mod target;

pub use expectation::{Expectation, ExpectationError};
pub use target::{TargetUrl, TargetUrlParseError};
