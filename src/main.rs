//! Terminal menu runner (default binary).
//!
//! Reads menu choices from stdin, one per line, so it works both
//! interactively and with piped input.

use std::io;

use anyhow::Result;
use log::info;

use tetris_stack::cli::{parse_args, CliCommand, USAGE};
use tetris_stack::controller;
use tetris_stack::core::{Session, SessionConfig};
use tetris_stack::term::{color_supported, TextRenderer};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args, SessionConfig::from_env())? {
        CliCommand::Run(options) => options,
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let mut session = Session::initialize(&options.config)?;
    info!(
        "starting session (seed {:?}, queue {}, reserve {}, history {})",
        session.seed(),
        options.config.queue_capacity,
        options.config.stack_capacity,
        options.config.history_capacity
    );

    let mut renderer = TextRenderer::new(io::stdout(), options.color && color_supported());
    let mut input = io::stdin().lock();
    controller::run(&mut session, &mut input, &mut renderer, options.output)
}
