//! Employee tracker — menu-driven CRUD over a small relational schema
//!
//! Module structure:
//!
//! ```text
//! src/
//! ├── config.rs   # Fixed connection constants + DB_PASSWORD from env
//! ├── error.rs    # Unified TrackerError + Result alias
//! ├── models.rs   # Row and payload types
//! ├── store/      # Data access layer (Store trait + PostgreSQL impl)
//! ├── menu.rs     # Main menu registry
//! ├── ui/         # Prompts, tables, colored output
//! └── app.rs      # Dispatch loop and action handlers
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod store;
pub mod ui;
