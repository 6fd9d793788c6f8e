//! Persistence plugin - loads the inventory at startup and writes it on request.

use bevy::prelude::*;
use rand::Rng;

use super::error::PersistenceError;
use super::io::{load_inventory, save_inventory, SaveLocation};
use crate::character::Wardrobe;
use crate::core::{SaveRequest, ShopConfig, ShopSet};
use crate::inventory::{ColorMasks, EquippedPart, PlayerInventory};

/// Persistence plugin - owns the save file.
pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_player_inventory)
            .add_systems(Update, handle_save_requests.in_set(ShopSet::Persist));
    }
}

/// Load the save file, or start a new inventory from the default loadout.
pub fn load_player_inventory(mut commands: Commands, config: Res<ShopConfig>) {
    let location = SaveLocation::from_config(&config);

    let mut inventory = match load_inventory(&location) {
        Ok(inventory) => {
            info!("Loaded save from {:?}", location.path());
            inventory
        }
        Err(PersistenceError::FileNotFound(path)) => {
            info!("No save at {}, starting fresh", path);
            PlayerInventory::default()
        }
        Err(e) => {
            error!("{}; starting fresh", e);
            PlayerInventory::default()
        }
    };

    let loadout: Vec<EquippedPart> = config
        .default_loadout
        .iter()
        .map(|&(part_type, id)| EquippedPart::new(part_type, id, ColorMasks::default()))
        .collect();
    inventory.ensure_defaults(&loadout);

    if inventory.coins == 0 {
        inventory.coins = rand::thread_rng().gen_range(config.starting_coins_range());
        info!("Granted {} starting coins", inventory.coins);
    }

    commands.insert_resource(location);
    commands.insert_resource(inventory);
}

/// Write the inventory once per frame if anything asked for a save.
fn handle_save_requests(
    mut requests: EventReader<SaveRequest>,
    location: Res<SaveLocation>,
    wardrobe: Res<Wardrobe>,
    mut inventory: ResMut<PlayerInventory>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let snapshot = wardrobe.equipped_snapshot();
    if !snapshot.is_empty() && inventory.body_parts_equipped != snapshot {
        inventory.body_parts_equipped = snapshot;
    }

    match save_inventory(&location, &inventory) {
        Ok(()) => debug!("Saved inventory to {:?}", location.path()),
        Err(e) => error!("Failed to save inventory: {}", e),
    }
}
