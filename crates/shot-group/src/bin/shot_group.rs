//! Replay a capture script and print the measured target as JSON.
//!
//! The script format is `shot_group::replay::CaptureScript`; see the crate
//! docs for the JSON layout. This binary is the reference "UI driver" for
//! the engine: it performs the file I/O the library crates deliberately
//! avoid.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use shot_group::replay::{parse_script, replay};
use shot_group::PresetCatalog;

#[derive(Parser, Debug)]
#[command(name = "shot-group", about = "Measure a shot group from a capture script")]
struct Cli {
    /// Path to a JSON capture script.
    script: PathBuf,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&cli.script)?;
    let script = parse_script(&json)?;
    let target = replay(&script, &PresetCatalog::builtin())?;

    let out = if cli.pretty {
        serde_json::to_string_pretty(&target)?
    } else {
        serde_json::to_string(&target)?
    };
    Ok(out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = shot_group::core::init_with_level(level);

    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
