//! # Medialib
//!
//! Media library maintenance: finds attachment records whose file has
//! disappeared from disk and removes them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod ui;
