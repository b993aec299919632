//! Utility functions for the application,
//! including command execution and file system operations.

pub mod command_runner;
pub mod file_system;
