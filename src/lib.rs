// Course Enrollment Register - Core Library
// Exposes the register, its entities, and the menu session for the CLI and tests

pub mod entities;
pub mod registry;
pub mod config;
pub mod render;
pub mod menu;

// Only compile the browser when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use entities::{Course, Enrollment, Student, Teacher};
pub use registry::{Registry, StudentEnrollments};
pub use config::{Locale, MenuConfig, OutputFormat};
pub use render::{Labels, Renderer};
pub use menu::{Menu, Selection, SelectionError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
