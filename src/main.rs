//! Cache Simulator CLI.
//!
//! Loads a memory image, builds the cache from command-line flags and/or a
//! TOML configuration file, and runs the program until `halt`. Every data
//! transfer is printed as it happens, followed by the final hit and miss
//! counts.
//!
//! # Usage
//!
//! ```text
//! cachesim -f program.mc -b 4 -s 2 -a 1
//! cachesim -f program.mc -c cache.toml --summary --stats-json stats.json
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process;

extern crate cache_simulator;

use cache_simulator::common::SimError;
use cache_simulator::config::{CacheConfig, Config};
use cache_simulator::core::Cpu;
use cache_simulator::sim::loader;
use cache_simulator::sim::{NullLog, PrintLog, TransferLog};

/// Command-line arguments for the cache simulator.
///
/// The cache geometry must be fully specified, either by the three
/// geometry flags or by a configuration file. Flags override the file.
#[derive(Parser, Debug)]
#[command(author, version, about = "Set-Associative Cache Simulator")]
struct Args {
    /// Memory image, one integer per line. Malformed lines are read as
    /// their leading integer (or 0) and reported as warnings.
    #[arg(short, long)]
    file: PathBuf,

    /// Block size in words (power of two).
    #[arg(short, long)]
    block_size: Option<usize>,

    /// Number of sets (power of two).
    #[arg(short, long)]
    sets: Option<usize>,

    /// Lines per set.
    #[arg(short, long)]
    associativity: Option<usize>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort if the program has not halted after this many instructions.
    #[arg(long)]
    max_instructions: Option<u64>,

    /// Do not print transfer events.
    #[arg(short, long)]
    quiet: bool,

    /// Print the final machine state.
    #[arg(long)]
    dump_state: bool,

    /// Print a summary block after the hit and miss counts.
    #[arg(long)]
    summary: bool,

    /// Write statistics as JSON to this path.
    #[arg(long)]
    stats_json: Option<PathBuf>,
}

/// Combines the configuration file with command-line overrides.
fn resolve_config(args: &Args) -> Result<Config, SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let missing = |name: &str| SimError::config(format!("{} was not supplied", name));
            let cache = CacheConfig::new(
                args.block_size.ok_or_else(|| missing("block size (-b)"))?,
                args.sets.ok_or_else(|| missing("set count (-s)"))?,
                args.associativity
                    .ok_or_else(|| missing("associativity (-a)"))?,
            );
            Config::with_cache(cache)
        }
    };

    if let Some(b) = args.block_size {
        config.cache.block_size = b;
    }
    if let Some(s) = args.sets {
        config.cache.num_sets = s;
    }
    if let Some(a) = args.associativity {
        config.cache.associativity = a;
    }
    if args.max_instructions.is_some() {
        config.sim.max_instructions = args.max_instructions;
    }
    if args.quiet {
        config.sim.print_transfers = false;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), SimError> {
    let config = resolve_config(args)?;
    log::info!(
        "cache: block_size={} num_sets={} associativity={}",
        config.cache.block_size,
        config.cache.num_sets,
        config.cache.associativity
    );

    println!("FILE: {}", args.file.display());
    let image = loader::load_image_file(&args.file, config.sim.memory_words)?;

    let sink: Box<dyn TransferLog> = if config.sim.print_transfers {
        Box::new(PrintLog)
    } else {
        Box::new(NullLog)
    };
    let mut cpu = Cpu::new(&config, sink)?;
    cpu.load_image(&image)?;

    let result = cpu.run().cloned();
    if args.dump_state {
        cpu.dump_state();
    }
    let stats = result?;
    stats.print();
    if args.summary {
        stats.print_summary();
    }

    if let Some(path) = &args.stats_json {
        stats.write_json(path)?;
    }
    Ok(())
}

/// Main entry point for the cache simulator.
///
/// Exits with status 0 after `halt`, or 1 on any error. Log output
/// defaults to warnings and above; `RUST_LOG` overrides it.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
