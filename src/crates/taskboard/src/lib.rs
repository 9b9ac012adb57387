//! In-memory task tracking REST service
//!
//! The [`store`] module owns the task records and the id-allocation rule;
//! the [`api`] module maps them onto HTTP routes. All state lives in process
//! memory, so a restart resets the service to its two seed records.

pub mod api;
pub mod config;
pub mod store;
pub mod version;
