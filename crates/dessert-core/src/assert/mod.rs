mod errors;
mod message;
mod policy;
mod types;

pub use errors::AssertError;
pub use message::compose_message;
pub use types::{CheckMode, CheckOutcome, Disposition, FailureHandler, FailurePolicy};
