//! Adapters for external dependencies.

pub mod expenses_sea;
