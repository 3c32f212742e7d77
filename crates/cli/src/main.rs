//! SIM16 command-line host.
//!
//! This binary loads a raw image into a flat 64 KiB memory and drives the
//! execution core. It performs:
//! 1. **Run:** Load an image at the start address and step until halt, fault, or the step budget.
//! 2. **Disassemble:** Print a listing of the instructions in an image.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use sim16_core::config::Config;
use sim16_core::isa::disasm;
use sim16_core::sim::{RunOutcome, Simulator, loader};
use sim16_core::soc::FlatMemory;

#[derive(Parser, Debug)]
#[command(
    name = "sim16",
    author,
    version,
    about = "16-bit teaching CPU emulator",
    long_about = "Run or disassemble a raw SIM16 image.\n\nExamples:\n  sim16 run program.bin\n  sim16 run program.bin --config sim16.json --max-steps 5000 --trace\n  sim16 disasm program.bin --count 32"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load an image and execute it.
    Run {
        /// Raw image, loaded at the configured start address.
        image: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured step budget.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Log every instruction and register write.
        #[arg(long)]
        trace: bool,
    },

    /// Print a disassembly listing of an image.
    Disasm {
        /// Raw image, listed from address 0.
        image: PathBuf,

        /// Number of instructions to list.
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            image,
            config,
            max_steps,
            trace,
        } => cmd_run(&image, config.as_deref(), max_steps, trace),
        Commands::Disasm { image, count } => cmd_disasm(&image, count),
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Could not read config '{}': {e}", path.display());
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: Invalid config '{}': {e}", path.display());
        process::exit(1);
    })
}

fn cmd_run(image: &Path, config: Option<&Path>, max_steps: Option<u64>, trace: bool) {
    init_tracing(trace);

    let mut config = load_config(config);
    if let Some(steps) = max_steps {
        config.run.max_steps = steps;
    }
    if trace {
        config.general.trace_instructions = true;
        config.general.trace_registers = true;
    }

    let bytes = loader::load_file(image).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });
    let mut memory = FlatMemory::new();
    if let Err(e) = loader::load_image(&mut memory, config.general.start_ip, &bytes) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }

    println!(
        "[*] {}: {} bytes at {:#06x}, SP={:#06x}, budget {} steps",
        image.display(),
        bytes.len(),
        config.general.start_ip,
        config.general.initial_sp,
        config.run.max_steps
    );

    let mut sim = Simulator::new(memory, &config);
    sim.cpu.resume();

    let code = match sim.run() {
        Ok(RunOutcome::Halted { steps }) => {
            println!("[*] Halted after {steps} steps");
            0
        }
        Ok(RunOutcome::StepLimit { steps }) => {
            println!("[!] Step budget exhausted after {steps} steps");
            2
        }
        Err(e) => {
            eprintln!("\n[!] FAULT: {e}");
            1
        }
    };

    sim.cpu.dump_state();
    println!("{}", sim.cpu.stats.to_json());
    process::exit(code);
}

fn cmd_disasm(image: &Path, count: usize) {
    init_tracing(false);

    let bytes = loader::load_file(image).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });
    let mut memory = FlatMemory::new();
    if let Err(e) = loader::load_image(&mut memory, 0, &bytes) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }

    for line in disasm::listing(&mut memory, 0, count) {
        println!("{line}");
    }
}
