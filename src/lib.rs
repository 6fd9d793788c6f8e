//! Avatar Shop - body-part customisation and a coin economy for a 2D character.
//!
//! The player walks up to vendors, buys and sells cosmetic body parts, and
//! dresses and tints their character in the customiser.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, configuration, tweening
//! - **Catalog**: The authored body-part variants and their prices
//! - **Character**: Equipped slots, hover previews, colour masks
//! - **Store**: Vendors, buying and selling
//! - **Persistence**: JSON save file
//! - **UI**: Window focus, coin counter, customiser and colour picker state
//!
//! The [`inventory`] module holds the persisted data and has no plugin of
//! its own; persistence loads it and the store mutates it.

pub mod catalog;
pub mod character;
pub mod core;
pub mod inventory;
pub mod persistence;
pub mod store;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct AvatarShopPlugin;

impl Plugin for AvatarShopPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Data loading
            .add_plugins(catalog::CatalogPlugin)
            .add_plugins(persistence::PersistencePlugin)

            // Gameplay
            .add_plugins(character::CharacterPlugin)
            .add_plugins(store::StorePlugin)

            // UI state
            .add_plugins(ui::UiPlugin);
    }
}
