pub mod request_log;
pub mod request_trace;

pub use request_log::RequestLog;
pub use request_trace::{RequestTrace, TraceId};
