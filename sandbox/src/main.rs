use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cpu6502::{loader, Cpu6502};
use peripherals::{Framebuffer, Printer};

/// Runs a raw 6502 binary image against the framebuffer/printer peripherals
/// until the program requests a soft halt or the tick budget runs out.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the raw binary image. Loaded at address 0; the reset vector
    /// baked into the image determines the initial program counter.
    rom: PathBuf,

    /// Stop after this many host ticks even if the program never halts.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Overrides the default logging verbosity (error, warn, info, debug,
    /// trace). Falls back to `RUST_LOG` / env_logger's default when unset.
    #[arg(long)]
    log_level: Option<String>,

    /// Drive execution through `cycle()` instead of `step()`, consuming one
    /// clock tick per host iteration rather than retiring a full instruction.
    #[arg(long)]
    cycle_paced: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let bus = loader::load_file(&cli.rom)
        .with_context(|| format!("failed to load ROM image at {}", cli.rom.display()))?;

    let mut cpu = Cpu6502::new(bus.clone());

    let mut framebuffer = Framebuffer::new(bus.clone());
    let mut printer = Printer::new(bus.clone(), std::io::stdout());

    let mut ticks: u64 = 0;
    loop {
        if printer.is_halt_requested() {
            log::info!("soft halt requested after {ticks} ticks");
            break;
        }
        if let Some(max_ticks) = cli.max_ticks {
            if ticks >= max_ticks {
                log::info!("max-ticks budget of {max_ticks} reached");
                break;
            }
        }

        if cli.cycle_paced {
            cpu.cycle();
        } else {
            cpu.step();
        }
        framebuffer.poll();
        printer.poll().context("printer I/O failure")?;
        ticks += 1;
    }

    Ok(())
}

fn init_logging(log_level: Option<&str>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = log_level {
        builder.parse_filters(level);
    }
    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_rom_path() {
        let result = Cli::try_parse_from(["sandbox"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_positional_and_flags() {
        let cli = Cli::try_parse_from([
            "sandbox",
            "program.bin",
            "--max-ticks",
            "100",
            "--cycle-paced",
        ])
        .unwrap();
        assert_eq!(cli.rom, PathBuf::from("program.bin"));
        assert_eq!(cli.max_ticks, Some(100));
        assert!(cli.cycle_paced);
    }
}
