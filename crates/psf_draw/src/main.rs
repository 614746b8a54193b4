#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use lazy_static::lazy_static;
use psf_engine_edit::{DrawCommand, codepoint_name};
use semver::Version;

mod script;
mod settings;

use script::EventScript;

lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

#[derive(Parser, Debug)]
#[command(version, about = "Drive the PSF glyph canvas from recorded input events", long_about = None)]
pub struct Args {
    /// Settings file (defaults to settings.toml in the configuration directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay an event script against a blank glyph and print the result
    Replay {
        /// TOML event script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Also print the draw command list
        #[arg(long)]
        draw_commands: bool,
    },
    /// Print the name of a codepoint (decimal or 0x hex)
    Name {
        #[arg(value_name = "CODEPOINT", value_parser = parse_codepoint)]
        codepoint: u32,
    },
}

fn parse_codepoint(arg: &str) -> Result<u32, String> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|e| format!("invalid codepoint '{arg}': {e}"))
}

fn start_logger(verbose: bool) -> Option<LoggerHandle> {
    let spec = if verbose { "debug" } else { "info" };
    let logger = match Logger::try_with_env_or_str(spec) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log specification: {err}");
            return None;
        }
    };

    let started = if let Some(log_dir) = settings::get_log_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("psf_draw").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("psf_draw.log"))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    } else {
        eprintln!("Failed to create log directory, logging to stderr");
        logger.log_to_stderr().start()
    };

    match started {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn run_replay(args: &Args, script_path: &Path, print_commands: bool) -> Result<()> {
    let settings = settings::load_settings(args.settings.as_deref())?;
    let script = EventScript::load(script_path)?;
    let outcome = script.replay(&settings).with_context(|| format!("Failed to replay {}", script_path.display()))?;

    print!("{}", outcome.glyph.to_ascii('#', '.'));
    match outcome.geometry {
        Some(geometry) => println!(
            "cell {}x{} at ({}, {})..({}, {})",
            geometry.dot_width(),
            geometry.dot_height(),
            geometry.x1(),
            geometry.y1(),
            geometry.x2(),
            geometry.y2()
        ),
        None => println!("no geometry"),
    }
    println!("pixels set: {}", outcome.glyph.count_set());
    println!("edited: {}", outcome.glyph_edited);
    println!("repaints: {}", outcome.repaints);

    if print_commands {
        for command in &outcome.commands {
            match command {
                DrawCommand::FillRect { rect, color } => println!(
                    "fill {} {} {} {} #{:02X}{:02X}{:02X}",
                    rect.x, rect.y, rect.width, rect.height, color.r, color.g, color.b
                ),
                DrawCommand::Line { from, to, color } => println!(
                    "line {} {} {} {} #{:02X}{:02X}{:02X}",
                    from.x, from.y, to.x, to.y, color.r, color.g, color.b
                ),
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let logger = start_logger(args.verbose);
    log::info!("Starting psf_draw {}", *VERSION);

    let result = match &args.command {
        Command::Replay { script, draw_commands } => run_replay(&args, script, *draw_commands),
        Command::Name { codepoint } => {
            let name = codepoint_name(*codepoint);
            if name.is_empty() {
                println!("U+{codepoint:04X}");
            } else {
                println!("U+{codepoint:04X} {name}");
            }
            Ok(())
        }
    };

    if let Err(err) = result {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        if let Some(logger) = logger {
            logger.flush();
        }
        std::process::exit(1);
    }
}
