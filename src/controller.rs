//! Session controller: the menu loop.
//!
//! Reads one line per turn, dispatches it to the session and reports the
//! result, either as the boxed menu or as JSON observations. End of input is
//! treated like choosing exit.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::cli::OutputMode;
use crate::core::{ActionOutcome, KindSource, Session};
use crate::input::{read_input, MenuInput};
use crate::term::{
    build_observation, invalid_choice_line, invalid_observation, outcome_lines,
    ready_observation, Line, MenuView, TextRenderer,
};

pub fn run<S, R, W>(
    session: &mut Session<S>,
    input: &mut R,
    renderer: &mut TextRenderer<W>,
    mode: OutputMode,
) -> Result<()>
where
    S: KindSource,
    R: BufRead,
    W: Write,
{
    let view = MenuView::default();

    match mode {
        OutputMode::Menu => renderer.draw(&view.banner())?,
        OutputMode::Json => renderer.raw_line(&ready_observation(session).to_json()?)?,
    }

    loop {
        if mode == OutputMode::Menu {
            renderer.draw(&view.render(session))?;
            renderer.prompt(&view.prompt())?;
        }

        let Some(line) = read_input(input)? else {
            log::debug!("end of input");
            if mode == OutputMode::Menu {
                let mut lines = vec![Line::default()];
                lines.extend(outcome_lines(&ActionOutcome::Exit));
                renderer.draw(&lines)?;
            }
            return Ok(());
        };

        match line {
            MenuInput::Empty => {}
            MenuInput::Invalid(text) => match mode {
                OutputMode::Menu => renderer.draw(&[invalid_choice_line(&text), Line::default()])?,
                OutputMode::Json => {
                    renderer.raw_line(&invalid_observation(session, &text).to_json()?)?
                }
            },
            MenuInput::Action(action) => {
                let outcome = session.apply(action);
                match mode {
                    OutputMode::Menu => {
                        let mut lines = outcome_lines(&outcome);
                        lines.push(Line::default());
                        renderer.draw(&lines)?;
                    }
                    OutputMode::Json => renderer.raw_line(
                        &build_observation(session, action.as_str(), &outcome).to_json()?,
                    )?,
                }
                if outcome == ActionOutcome::Exit {
                    return Ok(());
                }
            }
        }
    }
}
