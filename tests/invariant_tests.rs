//! Invariants under generated action sequences
//!
//! Each case draws a seed, a queue/reserve layout and a list of menu actions,
//! replays the actions against a fresh session and checks the invariants after
//! every step.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use tetris_stack::core::{ActionOutcome, Session, SessionConfig, SessionError};
use tetris_stack::types::StackAction;

const ACTIONS: [StackAction; 6] = [
    StackAction::PlayNormal,
    StackAction::HoldTransfer,
    StackAction::ReleaseTransfer,
    StackAction::SwapTopFront,
    StackAction::Undo,
    StackAction::FullExchange,
];

fn config(seed: u32, queue: usize, hold: usize) -> SessionConfig {
    SessionConfig {
        queue_capacity: queue,
        stack_capacity: hold,
        history_capacity: 10_000,
        ..SessionConfig::seeded(seed)
    }
}

fn replay<F>(config: &SessionConfig, actions: &[usize], mut check: F) -> Result<(), TestCaseError>
where
    F: FnMut(&Session, StackAction, &ActionOutcome, &Session) -> Result<(), TestCaseError>,
{
    let mut session = Session::initialize(config).unwrap();
    for &index in actions {
        let action = ACTIONS[index];
        let before = session.clone();
        let outcome = session.apply(action);
        check(&before, action, &outcome, &session)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn capacities_and_top_index_hold(
        seed in any::<u32>(),
        queue in 1usize..8,
        hold in 1usize..6,
        actions in prop::collection::vec(0..6usize, 1..300),
    ) {
        let config = config(seed, queue, hold);
        replay(&config, &actions, |_, action, _, after| {
            prop_assert!(after.queue().len() <= queue, "queue overflow after {:?}", action);
            prop_assert!(after.stack().len() <= hold, "reserve overflow after {:?}", action);
            prop_assert_eq!(
                after.stack().top_index().map(|t| t + 1).unwrap_or(0),
                after.stack().len()
            );
            prop_assert!(after.queue().head() < queue);
            prop_assert!(after.queue().tail() < queue);
            Ok(())
        })?;
    }

    #[test]
    fn full_queue_stays_full_after_removals(
        seed in any::<u32>(),
        queue in 1usize..8,
        hold in 1usize..6,
        actions in prop::collection::vec(0..6usize, 1..300),
    ) {
        let config = config(seed, queue, hold);
        replay(&config, &actions, |before, action, outcome, after| {
            let removes_one = matches!(
                action,
                StackAction::PlayNormal | StackAction::HoldTransfer | StackAction::ReleaseTransfer
            );
            let queue_empty = match outcome {
                ActionOutcome::Released(Ok(r)) => r.played == Err(SessionError::QueueEmpty),
                other => other.error() == Some(SessionError::QueueEmpty),
            };
            if removes_one && before.queue().is_full() && !queue_empty {
                prop_assert!(after.queue().is_full(), "{:?} left the queue short", action);
            }
            Ok(())
        })?;
    }

    #[test]
    fn undo_restores_state_before_every_action(
        seed in any::<u32>(),
        actions in prop::collection::vec(0..6usize, 1..200),
    ) {
        let config = config(seed, 5, 3);
        replay(&config, &actions, |before, action, _, after| {
            if action == StackAction::Undo {
                return Ok(());
            }
            let mut rewound = after.clone();
            prop_assert!(rewound.undo().is_ok());
            prop_assert_eq!(rewound.snapshot(), before.snapshot(), "undo after {:?}", action);
            Ok(())
        })?;
    }

    #[test]
    fn ids_stay_below_the_generator_counter(
        seed in any::<u32>(),
        actions in prop::collection::vec(0..6usize, 1..300),
    ) {
        let config = config(seed, 5, 3);
        replay(&config, &actions, |before, _, _, after| {
            prop_assert!(after.next_id() >= before.next_id());
            for piece in after.queue_view().iter().chain(after.stack_view().iter()) {
                prop_assert!(piece.id < after.next_id());
            }
            Ok(())
        })?;
    }
}
