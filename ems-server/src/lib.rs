//! EMS Server - Employee Data Management System API
//!
//! # Module structure
//!
//! ```text
//! ems-server/src/
//! ├── core/          # Config, state, server bootstrap
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # Error type, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
