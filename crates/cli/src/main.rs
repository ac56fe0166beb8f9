//! AArch64 instruction-set simulator CLI.
//!
//! This binary provides a single entry point for running raw program images. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON config file, then flag overrides.
//! 2. **Listing:** Optionally writes `txt_<name>.txt`, a hex listing of the image, beside it.
//! 3. **Execution:** Runs the image until it finishes or a stage fails, then prints stats and registers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use a64sim_core::config::Config;
use a64sim_core::sim::{Simulator, dump, loader};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "AArch64 instruction-set simulator",
    long_about = "Run a raw AArch64 program image loaded at address 0.\n\nExamples:\n  sim run -f prog.bin\n  sim run -f prog.bin --start 0x80 --max-cycles 100 --dump\n  RUST_LOG=trace sim run -f prog.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a raw binary image.
    Run {
        /// Raw image to execute, loaded at address 0.
        #[arg(short, long)]
        file: PathBuf,

        /// Address of the first instruction (decimal or 0x-prefixed hex).
        #[arg(long, value_parser = parse_u64)]
        start: Option<u64>,

        /// Memory size in bytes.
        #[arg(long)]
        mem_size: Option<usize>,

        /// Stop cleanly after this many completed cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file; flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write a hex listing of the image to `txt_<name>.txt`.
        #[arg(long)]
        dump: bool,

        /// Trace every pipeline stage.
        #[arg(long)]
        trace: bool,
    },
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
fn parse_u64(text: &str) -> Result<u64, String> {
    let parsed = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).map_or_else(
        || text.parse::<u64>(),
        |hex| u64::from_str_radix(hex, 16),
    );
    parsed.map_err(|e| format!("invalid address '{text}': {e}"))
}

/// Installs the tracing subscriber. `RUST_LOG` wins unless `trace` forces the trace level.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            start,
            mem_size,
            max_cycles,
            config,
            dump,
            trace,
        } => {
            let mut cfg = config.map_or_else(Config::default, |path| {
                Config::from_file(&path).unwrap_or_else(|e| {
                    eprintln!("[!] FATAL: {e}");
                    process::exit(1);
                })
            });
            if let Some(pc) = start {
                cfg.general.start_pc = pc;
            }
            if let Some(size) = mem_size {
                cfg.memory.size = size;
            }
            if max_cycles.is_some() {
                cfg.general.max_cycles = max_cycles;
            }
            cfg.general.trace_instructions |= trace;

            init_tracing(cfg.general.trace_instructions);
            cmd_run(&file, &cfg, dump);
        }
    }
}

/// Writes the hex listing of `image` next to `file`.
fn write_listing(file: &Path, image: &[u8]) -> std::io::Result<PathBuf> {
    let stem = file
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy());
    let out_path = file.with_file_name(dump::listing_name(&stem));
    let mut out = BufWriter::new(File::create(&out_path)?);
    dump::write_hex_listing(image, &mut out)?;
    out.flush()?;
    Ok(out_path)
}

/// Loads and runs an image; exits with code 1 on any failure.
fn cmd_run(file: &Path, config: &Config, dump: bool) {
    let image = loader::load_binary(file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    println!("[*] Direct execution: {}", file.display());
    println!(
        "    Start PC: {:#x}  Memory: {} bytes  Max cycles: {}",
        config.general.start_pc,
        config.memory.size,
        config
            .general
            .max_cycles
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string())
    );

    if dump {
        match write_listing(file, &image) {
            Ok(path) => println!("[*] Wrote listing {}", path.display()),
            Err(e) => {
                eprintln!("[!] FATAL: could not write listing: {e}");
                process::exit(1);
            }
        }
    }

    let mut sim = Simulator::new(&image, config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    let result = sim.run();
    info!("simulation ended");

    print!("{}", sim.stats());
    print!("{}", sim.cpu.regs.dump());
    let _ = std::io::stdout().flush();

    if let Err(e) = result {
        eprintln!("\n[!] {} stage failed: {e}", e.stage());
        process::exit(1);
    }
}
