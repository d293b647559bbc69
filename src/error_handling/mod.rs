//! Error handling: typed errors, retriability, and the retry strategy.

mod retry;
mod types;

pub use retry::{get_retry_strategy, is_retriable_error};
pub use types::{GeometryError, InitializationError, LoadError, LoadErrorKind};
