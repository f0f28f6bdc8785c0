//! APEX Pipeline Simulator CLI.
//!
//! The main executable for the simulator. It parses command-line
//! arguments, loads the program file into code memory, and runs the
//! pipeline to completion.
//!
//! # Usage
//!
//! ```text
//! apex [--config <file.toml>] <input_file> [<mode>] [<extra>]
//! ```
//!
//! `mode` is compared case-insensitively against `display`; any other
//! value runs quietly (`simulate`). Both modes end with the
//! architectural-file and data-memory dumps and a statistics summary.

use clap::Parser;
use std::process;

use apex_emulator::config::Config;
use apex_emulator::core::memory::CodeMemory;
use apex_emulator::core::Cpu;
use apex_emulator::sim::loader;

/// Command-line arguments for the APEX simulator.
#[derive(Parser, Debug)]
#[command(name = "apex", author, version, about = "APEX 5-stage pipeline simulator")]
struct Args {
    /// Assembled program file, one instruction per line.
    input_file: String,

    /// Output mode: "display" prints the per-cycle pipeline trace;
    /// anything else runs quietly.
    #[arg(default_value = "simulate")]
    mode: String,

    /// Reserved third argument; accepted and ignored.
    #[arg(value_name = "EXTRA")]
    _extra: Option<String>,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("APEX_Error : {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let program = match loader::load_program(&args.input_file) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("APEX_Error : {}", e);
            process::exit(1);
        }
    };
    if program.is_empty() {
        eprintln!(
            "APEX_Error : program file '{}' contains no instructions",
            args.input_file
        );
        process::exit(1);
    }
    eprintln!(
        "APEX_CPU : Initialized APEX CPU, loaded {} instructions",
        program.len()
    );

    let code = CodeMemory::new(config.general.start_pc, program);
    let mut cpu = Cpu::new(code, &config);
    cpu.trace = args.mode.eq_ignore_ascii_case("display") || config.general.trace_instructions;

    match cpu.run() {
        Ok(()) => {
            cpu.stats.print();
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {}", e);
            cpu.stats.print();
            process::exit(1);
        }
    }
}
