//! Process configuration read from the environment at startup.

pub mod db;
pub mod server;
