//! Command-line arguments.
//!
//! Flags override the environment-derived [`SessionConfig`].

use anyhow::{anyhow, Result};

use crate::core::{HistoryOverflow, SessionConfig};

pub const USAGE: &str = "\
usage: tetris-stack [options]

options:
  --seed N          fixed RNG seed (default: clock-derived)
  --queue N         next queue capacity (default: 5)
  --hold N          reserve capacity (default: 3)
  --history N       undo snapshots kept (default: 100)
  --evict-history   drop the oldest snapshot when history is full
  --json            print one JSON observation per action instead of the menu
  --no-color        plain text output
  -h, --help        show this help";

/// How the controller reports state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Menu,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config: SessionConfig,
    pub output: OutputMode,
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliOptions),
    Help,
}

fn value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    raw.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, raw))
}

pub fn parse_args(args: &[String], base: SessionConfig) -> Result<CliCommand> {
    let mut options = CliOptions {
        config: base,
        output: OutputMode::Menu,
        color: true,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                options.config.seed = Some(value(args, i, "--seed")?);
            }
            "--queue" => {
                i += 1;
                options.config.queue_capacity = value(args, i, "--queue")?;
            }
            "--hold" => {
                i += 1;
                options.config.stack_capacity = value(args, i, "--hold")?;
            }
            "--history" => {
                i += 1;
                options.config.history_capacity = value(args, i, "--history")?;
            }
            "--evict-history" => options.config.history_overflow = HistoryOverflow::EvictOldest,
            "--json" => options.output = OutputMode::Json,
            "--no-color" => options.color = false,
            "-h" | "--help" => return Ok(CliCommand::Help),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    options.config.validate()?;
    Ok(CliCommand::Run(options))
}
