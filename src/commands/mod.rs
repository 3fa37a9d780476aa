//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod cleanup;
