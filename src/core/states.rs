//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Transactions and
//! wardrobe edits only run once loading has finished, and the HUD windows
//! are modelled as sub-states of active gameplay.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while the catalog and save file are read
/// - Move to `InGame` once both resources exist
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading catalog and save data
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Mirrors which HUD window is open. Anything other than `Exploring`
/// puts the player in focus mode (no walking around).
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Walking around the world, no window open
    #[default]
    Exploring,
    /// A vendor's store window is open
    Shopping,
    /// The character customiser window is open
    Customizing,
}

impl PlayState {
    /// Whether a window has taken focus away from the world.
    pub fn is_focused(&self) -> bool {
        !matches!(self, PlayState::Exploring)
    }
}
