//! Menu loop tests with scripted input

use std::io::Cursor;

use serde::Deserialize;

use tetris_stack::cli::OutputMode;
use tetris_stack::controller;
use tetris_stack::core::{Session, SessionConfig};
use tetris_stack::term::TextRenderer;

fn run(input: &str, mode: OutputMode) -> (Session, String) {
    let mut session = Session::initialize(&SessionConfig::seeded(9)).unwrap();
    let mut input = Cursor::new(input.to_string());
    let mut renderer = TextRenderer::new(Vec::new(), false);
    controller::run(&mut session, &mut input, &mut renderer, mode).unwrap();
    let out = String::from_utf8(renderer.into_inner()).unwrap();
    (session, out)
}

#[derive(Debug, Deserialize)]
struct PieceObs {
    kind: char,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct Obs {
    action: Option<String>,
    status: String,
    error: Option<String>,
    messages: Vec<String>,
    queue: Vec<PieceObs>,
    reserve: Vec<PieceObs>,
    history_len: usize,
    next_id: u64,
    seed: Option<u32>,
}

fn ids(pieces: &[PieceObs]) -> Vec<u64> {
    pieces.iter().map(|p| p.id).collect()
}

#[test]
fn test_menu_session_flow() {
    let (session, out) = run("2\n5\nabc\n\n0\n", OutputMode::Menu);

    assert!(out.starts_with("=== TETRIS STACK ===\n"));
    assert!(out.contains("Queue    : ["));
    assert!(out.contains("  Reserved ["));
    assert!(out.contains("  Last action undone!"));
    assert!(out.contains("  Invalid option: \"abc\""));
    assert!(out.contains("║ 6 - Exchange queue with reserve"));
    assert!(out.trim_end().ends_with("Thanks for playing!"));
    // One menu per line read.
    assert_eq!(out.matches('╔').count(), 5);

    // Hold then undo: back to the initial layout.
    assert!(session.stack_view().is_empty());
    assert_eq!(session.queue_view().len(), 5);
}

#[test]
fn test_menu_end_of_input_exits() {
    let (_, out) = run("1\n", OutputMode::Menu);
    assert!(out.contains("  Played piece ["));
    assert!(out.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn test_menu_reports_rejections() {
    let (_, out) = run("3\n4\n", OutputMode::Menu);
    assert!(out.contains("  Reserve empty!"));
    assert!(out.contains("  Cannot swap: one of the structures is empty!"));
}

#[test]
fn test_json_observations() {
    let (_, out) = run("1\n3\n6\nxyz\n", OutputMode::Json);
    let obs: Vec<Obs> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(obs.len(), 5);

    let ready = &obs[0];
    assert_eq!(ready.status, "ready");
    assert!(ready.action.is_none());
    assert_eq!(ids(&ready.queue), vec![0, 1, 2, 3, 4]);
    assert_eq!(ready.history_len, 1);
    assert_eq!(ready.next_id, 5);
    assert_eq!(ready.seed, Some(9));

    let played = &obs[1];
    assert_eq!(played.action.as_deref(), Some("play"));
    assert_eq!(played.status, "ok");
    assert_eq!(ids(&played.queue), vec![1, 2, 3, 4, 5]);
    assert_eq!(
        played.messages,
        vec![format!("Played piece [{} 0]", ready.queue[0].kind)]
    );

    let released = &obs[2];
    assert_eq!(released.status, "rejected");
    assert_eq!(released.error.as_deref(), Some("Reserve empty!"));
    assert_eq!(released.history_len, 3);

    let exchanged = &obs[3];
    assert_eq!(exchanged.action.as_deref(), Some("fullExchange"));
    assert!(exchanged.queue.is_empty());
    assert_eq!(ids(&exchanged.reserve), vec![3, 2, 1]);
    assert_eq!(exchanged.messages.len(), 2);
    assert!(exchanged.messages[1].starts_with("Discarded: "));

    let invalid = &obs[4];
    assert_eq!(invalid.status, "invalid");
    assert!(invalid.action.is_none());
    assert_eq!(invalid.history_len, 4);
}
