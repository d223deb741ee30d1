//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: unified logging
//! initialization and assertions for RFC 7807 problem responses.

pub mod logging;
pub mod problem_details;
