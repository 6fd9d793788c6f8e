//! Avatar Shop - Entry Point
//!
//! Runs the shop headless: loads the catalog and save file, logs the
//! character's outfit and balance, and exits. Pass a body-part category
//! (e.g. `Hair`) to also log that store's stock.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use avatar_shop::catalog::BodyPartType;
use avatar_shop::character::CharacterSprites;
use avatar_shop::core::{GameState, OpenStore};
use avatar_shop::inventory::PlayerInventory;
use avatar_shop::store::StoreListing;

/// Frames to wait for loading before giving up.
const MAX_LOADING_FRAMES: usize = 10;

fn main() {
    let store = std::env::args().nth(1).and_then(|arg| {
        let found = BodyPartType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(&arg));
        if found.is_none() {
            eprintln!("Unknown body-part category '{arg}'");
        }
        found
    });

    let mut app = App::new();
    app
        // Headless Bevy
        .add_plugins((MinimalPlugins, LogPlugin::default(), StatesPlugin))

        // Our game plugin
        .add_plugins(avatar_shop::AvatarShopPlugin);

    for _ in 0..MAX_LOADING_FRAMES {
        app.update();
        if *app.world().resource::<State<GameState>>().get() == GameState::InGame {
            break;
        }
    }

    if *app.world().resource::<State<GameState>>().get() != GameState::InGame {
        error!("Loading did not finish");
        return;
    }

    if let Some(part_type) = store {
        app.world_mut().send_event(OpenStore { part_type });
        app.update();
    }
    app.update();

    let world = app.world();
    let inventory = world.resource::<PlayerInventory>();
    info!("Balance: {} coins", inventory.coins);
    for equipped in &inventory.body_parts_equipped {
        info!(
            "{}: variant {} (owned: {:?})",
            equipped.part_type,
            equipped.id,
            inventory.owned_ids(equipped.part_type)
        );
        for (param, color) in equipped.masks.shader_params() {
            debug!("  {} = {}", param, color.to_hex());
        }
    }
    info!("Character draws {} sprite layers", world.resource::<CharacterSprites>().layers.len());

    let listing = world.resource::<StoreListing>();
    if listing.part_type.is_some() {
        info!("{}", listing.title());
        for entry in &listing.entries {
            let action = if entry.purchased { "sell" } else { "buy" };
            info!("  [{}] {} - {} coins ({})", entry.id, entry.tag, entry.price, action);
        }
    }
}
