//! Command implementations

pub mod query;
pub mod simple;

pub use query::{QueryConfig, run_query, write_matches};
pub use simple::run_simple;
