mod classify_failure;
mod dispatch_message;
mod rate_limiter;

pub use classify_failure::*;
pub use dispatch_message::*;
pub use rate_limiter::*;
