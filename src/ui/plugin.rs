//! UI plugin - headless HUD state: windows, coins, customiser and colour picker.

use bevy::prelude::*;

use super::{coins, customizer, windows};

/// UI plugin - handles all user interface state.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        windows::setup_window_systems(app);
        coins::setup_coin_systems(app);
        customizer::setup_customizer_systems(app);
    }
}
