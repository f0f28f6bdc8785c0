//! Simulation harness: program loading.
//!
//! Handles reading assembled APEX programs from disk and turning them
//! into the instruction records the core executes.

/// Program file loader and line parser.
pub mod loader;
