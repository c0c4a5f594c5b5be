//! Move dispatch - maps a [`Move`] onto the game operation it names.

use crate::game::TetrisGame;
use crate::types::Move;

/// Apply a move to the game.
///
/// Returns false if the game rejected a shift or rotation. `Down` always
/// succeeds; whether it counts toward a step budget is up to the caller
/// (see [`Move::counts_as_step`]).
pub fn apply_move<G>(game: &mut G, mv: Move) -> bool
where
    G: TetrisGame + ?Sized,
{
    match mv {
        Move::Down => {
            game.step();
            true
        }
        Move::Left => game.move_left(),
        Move::Right => game.move_right(),
        Move::RotateCw => game.rotate_clockwise(),
        Move::RotateCcw => game.rotate_counter_clockwise(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which operation ran and rejects everything but `step`.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl TetrisGame for Recorder {
        type View = ();

        fn step(&mut self) {
            self.calls.push("step");
        }
        fn move_left(&mut self) -> bool {
            self.calls.push("move_left");
            false
        }
        fn move_right(&mut self) -> bool {
            self.calls.push("move_right");
            false
        }
        fn rotate_clockwise(&mut self) -> bool {
            self.calls.push("rotate_clockwise");
            false
        }
        fn rotate_counter_clockwise(&mut self) -> bool {
            self.calls.push("rotate_counter_clockwise");
            false
        }
        fn is_game_over(&self) -> bool {
            false
        }
        fn set_game_over(&mut self) {}
        fn points(&self) -> u64 {
            0
        }
        fn view(&self) {}
    }

    #[test]
    fn each_move_reaches_its_operation() {
        let mut game = Recorder::default();
        for mv in Move::ALL {
            apply_move(&mut game, mv);
        }
        assert_eq!(
            game.calls,
            [
                "step",
                "move_left",
                "move_right",
                "rotate_clockwise",
                "rotate_counter_clockwise"
            ]
        );
    }

    #[test]
    fn down_is_never_rejected() {
        let mut game = Recorder::default();
        assert!(apply_move(&mut game, Move::Down));
        for mv in [Move::Left, Move::Right, Move::RotateCw, Move::RotateCcw] {
            assert!(!apply_move(&mut game, mv), "{mv} should be rejected");
        }
    }
}
