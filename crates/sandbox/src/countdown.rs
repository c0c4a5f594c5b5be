//! Countdown game - accepts every move, ends after a fixed number of steps.

use crate::core::TetrisGame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownGame {
    steps_until_over: u64,
    ticks: u64,
    game_over: bool,
}

impl CountdownGame {
    /// A game that ends on its `steps_until_over`-th step.
    pub fn new(steps_until_over: u64) -> Self {
        Self {
            steps_until_over,
            ticks: 0,
            game_over: steps_until_over == 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl TetrisGame for CountdownGame {
    /// Steps taken so far
    type View = u64;

    fn step(&mut self) {
        if self.game_over {
            return;
        }
        self.ticks += 1;
        if self.ticks >= self.steps_until_over {
            self.game_over = true;
        }
    }

    fn move_left(&mut self) -> bool {
        true
    }

    fn move_right(&mut self) -> bool {
        true
    }

    fn rotate_clockwise(&mut self) -> bool {
        true
    }

    fn rotate_counter_clockwise(&mut self) -> bool {
        true
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn set_game_over(&mut self) {
        self.game_over = true;
    }

    fn points(&self) -> u64 {
        self.ticks
    }

    fn view(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_on_the_configured_step() {
        let mut game = CountdownGame::new(3);
        game.step();
        game.step();
        assert!(!game.is_game_over());
        game.step();
        assert!(game.is_game_over());
        assert_eq!(game.ticks(), 3);

        // Steps after game over change nothing.
        game.step();
        assert_eq!(game.ticks(), 3);
    }

    #[test]
    fn zero_is_over_immediately() {
        assert!(CountdownGame::new(0).is_game_over());
    }
}
