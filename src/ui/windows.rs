//! Window switching - which HUD window has focus.

use bevy::prelude::*;

use crate::character::Wardrobe;
use crate::core::{CloseWindow, OpenCustomizer, OpenStore, PlayState, ShopSet};

/// Setup window systems.
pub fn setup_window_systems(app: &mut App) {
    app.add_systems(Update, switch_windows.in_set(ShopSet::Windows))
        .add_systems(OnExit(PlayState::Shopping), clear_store_previews);
}

/// Apply the last window request of the frame.
fn switch_windows(
    mut open_store: EventReader<OpenStore>,
    mut open_customizer: EventReader<OpenCustomizer>,
    mut close: EventReader<CloseWindow>,
    current: Res<State<PlayState>>,
    mut next: ResMut<NextState<PlayState>>,
) {
    let target = if close.read().count() > 0 {
        Some(PlayState::Exploring)
    } else if open_store.read().count() > 0 {
        Some(PlayState::Shopping)
    } else if open_customizer.read().count() > 0 {
        Some(PlayState::Customizing)
    } else {
        None
    };

    // Readers skipped by the else-if chain still need draining
    open_store.clear();
    open_customizer.clear();

    if let Some(target) = target {
        if *current.get() != target {
            debug!("Window {:?} -> {:?}", current.get(), target);
            next.set(target);
        }
    }
}

/// Hover previews never outlive the store window.
fn clear_store_previews(mut wardrobe: ResMut<Wardrobe>) {
    wardrobe.exit_all_previews();
}
