//! Common types shared throughout the APEX simulator.
//!
//! This module provides the error definitions used by the loader, the
//! configuration layer, and the pipeline core.

/// Error types for load-time and runtime failures.
pub mod error;

pub use error::SimError;
