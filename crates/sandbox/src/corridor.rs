//! Corridor game - one block at a time inside a walled corridor
//!
//! Coordinates: x grows to the right from the left wall, y grows downward from
//! the top. Locked blocks are not tracked cell by cell; each lock raises a
//! flat stack from the bottom by the block's depth.

use crate::core::{SimpleRng, TetrisGame};
use crate::types::Move;

/// Default corridor width (columns)
pub const CORRIDOR_WIDTH: u8 = 10;

/// Default corridor height (rows)
pub const CORRIDOR_HEIGHT: u8 = 20;

/// Longest block the game spawns
pub const MAX_BLOCK_LEN: u8 = 4;

/// Active falling block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: u8,
    pub y: u8,
    pub len: u8,
    pub vertical: bool,
}

impl Block {
    /// Columns covered
    pub fn span(&self) -> u8 {
        if self.vertical {
            1
        } else {
            self.len
        }
    }

    /// Rows covered
    pub fn depth(&self) -> u8 {
        if self.vertical {
            self.len
        } else {
            1
        }
    }

    /// The same block turned a quarter (direction does not matter for a bar)
    pub fn turned(&self) -> Self {
        Self {
            vertical: !self.vertical,
            ..*self
        }
    }

    fn lowered(&self) -> Self {
        Self {
            y: self.y + 1,
            ..*self
        }
    }
}

/// Complete corridor state. Doubles as the read-only view given to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorridorView {
    pub seed: u64,
    pub width: u8,
    pub height: u8,
    /// Rows filled from the bottom
    pub stack: u8,
    pub block: Option<Block>,
    pub points: u64,
    pub game_over: bool,
}

impl CorridorView {
    /// First filled row (== height when the corridor is empty)
    pub fn floor(&self) -> u8 {
        self.height.saturating_sub(self.stack)
    }

    /// Check if a block lies fully inside the walls and above the stack
    pub fn fits(&self, block: &Block) -> bool {
        let right = block.x as u16 + block.span() as u16;
        let bottom = block.y as u16 + block.depth() as u16;
        right <= self.width as u16 && bottom <= self.floor() as u16
    }

    /// Whether the game would accept the move in this state
    pub fn accepts(&self, mv: Move) -> bool {
        if self.game_over {
            return false;
        }
        let Some(block) = self.block else {
            // Only a step can bring in the next block.
            return mv == Move::Down;
        };

        match mv {
            Move::Down => true,
            Move::Left => block.x > 0,
            Move::Right => block.x + block.span() < self.width,
            Move::RotateCw | Move::RotateCcw => self.fits(&block.turned()),
        }
    }

    /// All moves the game would accept, in [`Move::ALL`] order
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.accepts(mv))
            .collect()
    }
}

/// Deterministic corridor game
#[derive(Debug, Clone)]
pub struct CorridorGame {
    state: CorridorView,
    rng: SimpleRng,
}

impl CorridorGame {
    /// Create a default-sized corridor with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_size(seed, CORRIDOR_WIDTH, CORRIDOR_HEIGHT)
    }

    /// Create a corridor of the given size (at least `MAX_BLOCK_LEN` each way)
    pub fn with_size(seed: u64, width: u8, height: u8) -> Self {
        Self {
            state: CorridorView {
                seed,
                width: width.max(MAX_BLOCK_LEN),
                height: height.max(MAX_BLOCK_LEN),
                stack: 0,
                block: None,
                points: 0,
                game_over: false,
            },
            rng: SimpleRng::new(seed),
        }
    }

    pub fn block(&self) -> Option<Block> {
        self.state.block
    }

    pub fn stack(&self) -> u8 {
        self.state.stack
    }

    /// Spawn a new horizontal block centred at the top
    fn spawn_block(&mut self) {
        let len = 1 + self.rng.next_range(MAX_BLOCK_LEN as u32) as u8;
        let block = Block {
            x: (self.state.width - len) / 2,
            y: 0,
            len,
            vertical: false,
        };

        if self.state.fits(&block) {
            self.state.block = Some(block);
        } else {
            self.state.block = None;
            self.state.game_over = true;
        }
    }

    fn lock_block(&mut self, block: Block) {
        self.state.block = None;
        self.state.stack = self.state.stack.saturating_add(block.depth());
        self.state.points += 1;

        if self.state.stack >= self.state.height {
            self.state.game_over = true;
        } else {
            self.spawn_block();
        }
    }

    fn try_replace(&mut self, mv: Move, next: impl FnOnce(Block) -> Block) -> bool {
        if !self.state.accepts(mv) {
            return false;
        }
        self.state.block = self.state.block.map(next);
        true
    }
}

impl TetrisGame for CorridorGame {
    type View = CorridorView;

    fn step(&mut self) {
        if self.state.game_over {
            return;
        }
        match self.state.block {
            None => self.spawn_block(),
            Some(block) => {
                let lowered = block.lowered();
                if self.state.fits(&lowered) {
                    self.state.block = Some(lowered);
                } else {
                    self.lock_block(block);
                }
            }
        }
    }

    fn move_left(&mut self) -> bool {
        self.try_replace(Move::Left, |b| Block { x: b.x - 1, ..b })
    }

    fn move_right(&mut self) -> bool {
        self.try_replace(Move::Right, |b| Block { x: b.x + 1, ..b })
    }

    fn rotate_clockwise(&mut self) -> bool {
        self.try_replace(Move::RotateCw, |b| b.turned())
    }

    fn rotate_counter_clockwise(&mut self) -> bool {
        self.try_replace(Move::RotateCcw, |b| b.turned())
    }

    fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    fn set_game_over(&mut self) {
        self.state.game_over = true;
    }

    fn points(&self) -> u64 {
        self.state.points
    }

    fn view(&self) -> CorridorView {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u64) -> CorridorGame {
        let mut game = CorridorGame::new(seed);
        game.step();
        game
    }

    #[test]
    fn test_first_step_spawns_block() {
        let mut game = CorridorGame::new(1);
        assert!(game.block().is_none());

        game.step();
        let block = game.block().expect("expected block after first step");
        assert_eq!(block.y, 0);
        assert!(!block.vertical);
        assert!((1..=MAX_BLOCK_LEN).contains(&block.len));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = started(9315);
        let mut b = started(9315);
        for _ in 0..200 {
            a.step();
            b.step();
            assert_eq!(a.view(), b.view());
        }
    }

    #[test]
    fn test_walls_reject_shifts() {
        let mut game = started(6646813);

        let mut left_moves = 0;
        while game.move_left() {
            left_moves += 1;
        }
        assert_eq!(game.block().unwrap().x, 0);
        assert!(left_moves <= CORRIDOR_WIDTH);
        assert!(!game.move_left());

        while game.move_right() {}
        let block = game.block().unwrap();
        assert_eq!(block.x + block.span(), CORRIDOR_WIDTH);
        assert!(!game.move_right());
    }

    #[test]
    fn test_turn_rejected_near_floor() {
        let mut game = started(3);

        // Ride the block down to the floor; the next step would lock it.
        while game.view().fits(&Block {
            y: game.block().unwrap().y + 1,
            ..game.block().unwrap()
        }) {
            game.step();
        }

        let block = game.block().unwrap();
        if block.len > 1 {
            assert!(!game.rotate_clockwise());
            assert!(!game.rotate_counter_clockwise());
        }
    }

    #[test]
    fn test_turn_toggles_orientation() {
        let mut game = started(11);
        let before = game.block().unwrap();

        assert!(game.rotate_clockwise());
        assert_eq!(game.block().unwrap().vertical, !before.vertical);
        assert!(game.rotate_counter_clockwise());
        assert_eq!(game.block().unwrap(), before);
    }

    #[test]
    fn test_lock_raises_stack_and_scores() {
        let mut game = started(5);
        let depth = game.block().unwrap().depth();

        for _ in 0..CORRIDOR_HEIGHT {
            game.step();
        }

        assert_eq!(game.points(), 1);
        assert_eq!(game.stack(), depth);
    }

    #[test]
    fn test_stepping_alone_ends_game() {
        let mut game = started(42);
        let mut guard = 0;
        while !game.is_game_over() {
            game.step();
            guard += 1;
            assert!(guard < 10_000, "corridor never filled");
        }
        assert!(game.points() > 0);
        assert!(!game.view().accepts(Move::Down));
    }

    #[test]
    fn test_view_predicts_game() {
        let mut game = started(77);
        let mut rng = SimpleRng::new(77);

        for _ in 0..500 {
            if game.is_game_over() {
                break;
            }
            let mv = *rng.choose(&Move::ALL).unwrap();
            let predicted = game.view().accepts(mv);
            let applied = crate::core::apply_move(&mut game, mv);
            assert_eq!(predicted, applied, "view disagreed with game on {mv}");
        }
    }

    #[test]
    fn test_set_game_over() {
        let mut game = started(1);
        game.set_game_over();
        assert!(game.is_game_over());
        assert!(game.view().legal_moves().is_empty());
    }
}
