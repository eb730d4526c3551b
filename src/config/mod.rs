//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod debug;
mod endpoints;
mod table;

// Re-export commonly used items
pub use debug::DF;
pub use endpoints::{DashboardConfig, ENDPOINTS};
pub use table::TABLE;
