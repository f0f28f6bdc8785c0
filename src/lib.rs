//! APEX Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate simulator for the APEX teaching
//! ISA: a five-stage in-order pipeline (Fetch, Decode/Register-Read,
//! Execute, Memory, Writeback) with a register scoreboard instead of
//! forwarding, a two-cycle multiplier, and branch resolution with full
//! flush of the wrong path.
//!
//! # Architecture
//!
//! * **Core**: five stage functions applied tail-first each cycle over
//!   per-stage latches, emulating edge-triggered clocking.
//! * **Hazards**: a valid-bit scoreboard serialises producer/consumer
//!   pairs; `BZ`/`BNZ` wait for the zero flag of the immediately
//!   preceding arithmetic instruction.
//! * **Front end**: a line-oriented assembler loads programs into a dense
//!   code memory starting at PC 4000.
//!
//! # Modules
//!
//! * `common`: shared error types.
//! * `config`: TOML-backed simulator configuration.
//! * `core`: CPU core implementation.
//! * `isa`: APEX instruction set definitions.
//! * `sim`: program loading.
//! * `stats`: run statistics collection.

/// Shared error types used across the simulator.
pub mod common;

/// Configuration loading and defaults.
///
/// Parses an optional TOML file controlling data memory size, dump width,
/// the code base address, and tracing.
pub mod config;

/// CPU core implementation including the pipeline stages.
///
/// Implements the five-stage in-order pipeline, architectural register
/// file with scoreboard, and code/data memory.
pub mod core;

/// APEX instruction set definitions and decoding helpers.
pub mod isa;

/// Simulation harness and program loader.
pub mod sim;

/// Run statistics collection and reporting.
pub mod stats;
