mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod menu;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::ExecutableCommand;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Arguments::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mousesnake: {e}");
            return ExitCode::from(2);
        }
    };
    let (globals, warning) = match startup(&args) {
        Ok(gw) => gw,
        Err(e) => {
            eprintln!("mousesnake: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    // The pointer is this game's steering wheel
    let _ = io::stdout().execute(EnableMouseCapture);
    let r = App::new(globals, warning).run(terminal);
    let _ = io::stdout().execute(DisableMouseCapture);
    ratatui::restore();
    io_exit(r)
}

/// Load the configuration and the stored high score.  Configuration
/// problems are fatal; a bad high-score file degrades to 0 plus a warning
/// to show once the interface is up.
fn startup(args: &Arguments) -> anyhow::Result<(Globals, Option<Warning>)> {
    let config = if let Some(path) = args.config.as_deref() {
        Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else {
        let path = Config::default_path().context("failed to load configuration")?;
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    };
    let (high_score, warning) = match highscores::load(&config) {
        Ok(score) => (score, None),
        Err(e) => (0, Some(Warning::from(e))),
    };
    Ok((Globals { config, high_score }, warning))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Command-line arguments
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    /// Path to a configuration file to use instead of the default
    config: Option<PathBuf>,
}

impl Arguments {
    /// Parse command-line arguments.  Returns `Ok(None)` if the program
    /// should exit without running (`--help`/`--version`).
    fn from_env() -> Result<Option<Arguments>, lexopt::Error> {
        let mut args = Arguments::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Short('h') | Long("help") => {
                    println!("Usage: mousesnake [-c|--config <file>]");
                    println!();
                    println!("Chase the pointer, eat apples, and don't bite your own tail.");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <file>  Read configuration from <file>");
                    println!("  -h, --help           Show this help and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}
