//! Isolated decision requests.
//!
//! Each request runs `get_move` on a fresh, named, single-use thread and waits
//! for the answer with an upper bound. The player and the view move into the
//! thread; the player comes back with the answer. A request that misses its
//! bound is abandoned: the thread is detached and whatever it eventually sends
//! goes nowhere, because the receiving end is already gone.
//!
//! A thread is never reused, so a player stuck forever pins only its own
//! thread and cannot block later requests or later playouts.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::core::{AutoPlayer, ProtocolError};
use crate::types::Move;

/// Outcome of one decision request.
#[derive(Debug)]
pub enum Decision<P> {
    /// The player answered in time and is handed back.
    Answered { player: P, mv: Option<Move> },
    /// No answer within the bound; the player stays with the abandoned thread.
    TimedOut,
    /// The worker ended without answering (the player panicked).
    Interrupted,
}

/// Ask `player` for a move on its own thread, waiting at most `bound`.
///
/// Fails only if the thread cannot be spawned.
pub fn request_decision<V, P>(
    player: P,
    view: V,
    bound: Duration,
    request_id: u64,
) -> Result<Decision<P>, ProtocolError>
where
    V: Send + 'static,
    P: AutoPlayer<V>,
{
    let (tx, rx) = mpsc::sync_channel::<(P, Option<Move>)>(1);

    let handle = thread::Builder::new()
        .name(format!("cupkit-decision-{}", request_id))
        .spawn(move || {
            let mut player = player;
            let mv = player.get_move(&view);
            // Receiver gone means the request was abandoned.
            let _ = tx.send((player, mv));
        })
        .map_err(ProtocolError::WorkerSpawn)?;

    match rx.recv_timeout(bound) {
        Ok((player, mv)) => {
            // The worker is done once it has sent; reap it.
            let _ = handle.join();
            trace!(request_id, ?mv, "decision answered");
            Ok(Decision::Answered { player, mv })
        }
        Err(RecvTimeoutError::Timeout) => {
            trace!(request_id, ?bound, "decision abandoned");
            Ok(Decision::TimedOut)
        }
        Err(RecvTimeoutError::Disconnected) => {
            let _ = handle.join();
            Ok(Decision::Interrupted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player_fn;
    use std::time::Instant;
    use tetris_cupkit_sandbox::{AlwaysDown, SlowPlayer, StallingPlayer};

    #[test]
    fn answered_request_returns_player_and_move() {
        let decision = request_decision(AlwaysDown, (), Duration::from_secs(5), 1).expect("spawn");
        match decision {
            Decision::Answered { mv, .. } => assert_eq!(mv, Some(Move::Down)),
            other => panic!("unexpected decision: {:?}", other),
        }
    }

    #[test]
    fn player_state_survives_round_trip() {
        let mut calls = 0u32;
        let player = player_fn(move |_: &()| {
            calls += 1;
            (calls < 2).then_some(Move::Left)
        });

        let Decision::Answered { player, mv } =
            request_decision(player, (), Duration::from_secs(5), 1).expect("spawn")
        else {
            panic!("first request did not answer");
        };
        assert_eq!(mv, Some(Move::Left));

        let Decision::Answered { mv, .. } =
            request_decision(player, (), Duration::from_secs(5), 2).expect("spawn")
        else {
            panic!("second request did not answer");
        };
        assert_eq!(mv, None);
    }

    #[test]
    fn stalled_request_times_out_near_bound() {
        let started = Instant::now();
        let decision =
            request_decision(StallingPlayer, (), Duration::from_millis(50), 1).expect("spawn");
        assert!(matches!(decision, Decision::TimedOut));
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn slow_request_misses_short_bound() {
        let player = SlowPlayer::new(Duration::from_millis(300), Move::Down);
        let decision = request_decision(player, (), Duration::from_millis(20), 1).expect("spawn");
        assert!(matches!(decision, Decision::TimedOut));
    }

    #[test]
    fn panicking_player_interrupts() {
        let player = player_fn(|_: &()| -> Option<Move> { panic!("player blew up") });
        let decision = request_decision(player, (), Duration::from_secs(5), 1).expect("spawn");
        assert!(matches!(decision, Decision::Interrupted));
    }
}
