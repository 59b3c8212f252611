//! Command-line cash-flow planner
//!
//! The application half of the workspace: snapshot storage and
//! import/export, the system clock, logging setup and text reports around
//! the `cashplan_core` projection engine.

pub mod commands;
pub mod logging;
pub mod storage;
pub mod util;

pub use commands::{Command, Context, run};
pub use logging::init_logging;
pub use storage::{DataConfig, DataDirectory, StorageError};
