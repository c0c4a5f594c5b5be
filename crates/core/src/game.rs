//! Game, autoplayer and factory traits.

use crate::types::Move;

/// A mutable Tetris game as seen by the harnesses.
///
/// Shift and rotation operations report whether the game accepted them.
/// Once [`is_game_over`](TetrisGame::is_game_over) is true the harnesses stop
/// driving the game.
pub trait TetrisGame {
    /// Read-only snapshot handed to the autoplayer before each decision.
    ///
    /// Decisions may run on another thread, so the view is owned and sendable.
    type View: Send + 'static;

    /// Advance gravity by one tick. May lock the piece and end the game.
    fn step(&mut self);

    fn move_left(&mut self) -> bool;

    fn move_right(&mut self) -> bool;

    fn rotate_clockwise(&mut self) -> bool;

    fn rotate_counter_clockwise(&mut self) -> bool;

    fn is_game_over(&self) -> bool;

    /// Force the game into its terminal state.
    fn set_game_over(&mut self);

    fn points(&self) -> u64;

    /// Take a snapshot of the current state.
    fn view(&self) -> Self::View;
}

/// Shorthand for the view type of a game.
pub type ViewOf<G> = <G as TetrisGame>::View;

/// An autonomous player.
///
/// Returning `None` means the player has no further decision and ends the
/// game voluntarily.
pub trait AutoPlayer<V>: Send + 'static {
    fn get_move(&mut self, view: &V) -> Option<Move>;
}

impl<V, P> AutoPlayer<V> for Box<P>
where
    P: AutoPlayer<V> + ?Sized,
{
    fn get_move(&mut self, view: &V) -> Option<Move> {
        (**self).get_move(view)
    }
}

/// Adapter turning a closure into an [`AutoPlayer`].
pub struct FnPlayer<F>(F);

/// Wrap a closure as an autoplayer.
///
/// ```
/// use tetris_cupkit_core::{player_fn, AutoPlayer, Move};
///
/// let mut player = player_fn(|depth: &u32| (*depth < 3).then_some(Move::Down));
/// assert_eq!(player.get_move(&0), Some(Move::Down));
/// assert_eq!(player.get_move(&3), None);
/// ```
pub fn player_fn<V, F>(f: F) -> FnPlayer<F>
where
    F: FnMut(&V) -> Option<Move> + Send + 'static,
{
    FnPlayer(f)
}

impl<V, F> AutoPlayer<V> for FnPlayer<F>
where
    F: FnMut(&V) -> Option<Move> + Send + 'static,
{
    fn get_move(&mut self, view: &V) -> Option<Move> {
        (self.0)(view)
    }
}

/// Builds the game and its player for one playout.
pub trait TetrisFactory {
    type Game: TetrisGame;
    type Player: AutoPlayer<ViewOf<Self::Game>>;

    /// Deterministic construction: equal seeds give equal games.
    fn create_game(&self, seed: u64) -> Self::Game;

    /// Build the player from an initial view of the game.
    fn create_player(&self, view: &ViewOf<Self::Game>) -> Self::Player;
}
