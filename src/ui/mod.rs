//! # User Interface
//!
//! Colored terminal output and a progress bar.

pub mod log;
pub mod progress;

pub use log::{debug, error, header, info, success, warn, Log};
pub use progress::Progress;
