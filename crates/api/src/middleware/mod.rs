//! Request middleware.

pub mod metrics;
pub mod session;

pub use metrics::count_requests;
pub use session::{session_middleware, SessionHandle};
