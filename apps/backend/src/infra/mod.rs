//! Infrastructure layer - database connection, schema bootstrap, state building.

pub mod db;
pub mod db_errors;
pub mod state;
