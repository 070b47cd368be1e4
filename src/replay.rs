//! Headless front-end: plays a fixed list of moves.

use crate::games::tictactoe::{GameEvent, GameSession, Position};
use tracing::{debug, instrument};

/// Starts a game on `session` and plays `moves` in order.
///
/// Returns every status line the session raised, in order. Moves after the
/// game ends are still submitted and ignored by the session.
#[instrument(skip(session))]
pub fn replay(session: &mut GameSession, name1: &str, name2: &str, moves: &[Position]) -> Vec<String> {
    let mut statuses = Vec::new();
    session.start_game(name1, name2);
    collect_statuses(session, &mut statuses);

    for pos in moves {
        let outcome = session.play_round(*pos);
        debug!(position = %pos, ?outcome, "Replayed move");
        collect_statuses(session, &mut statuses);
    }
    statuses
}

fn collect_statuses(session: &mut GameSession, statuses: &mut Vec<String>) {
    for event in session.drain_events() {
        if let GameEvent::StatusChanged(status) = event {
            statuses.push(status);
        }
    }
}
