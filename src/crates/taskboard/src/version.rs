// Version information module for taskboard
//
// Provides version and service identity constants

/// Version string for the taskboard crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Service identifier reported by the health endpoint
pub const SERVICE_NAME: &str = "rust-axum";
