//! Core plugin that sets up game states, events, and the frame ordering.

use bevy::prelude::*;

use super::config::ShopConfig;
use super::events::*;
use super::states::*;
use crate::catalog::BodyPartCatalog;
use crate::inventory::PlayerInventory;

/// Ordering of the per-frame shop work.
///
/// Requests are applied first, then derived state (listings, sprites,
/// counters) is refreshed, and anything that asked for a save is written last.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopSet {
    /// Window changes and page switches
    Windows,
    /// Buy, sell, equip, preview and colour requests
    Transactions,
    /// Rebuild data derived from the inventory and wardrobe
    Presentation,
    /// Save file writes
    Persist,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the window sub-state
/// - Global events (BuyRequest, CoinsChanged, SaveRequest, etc.)
/// - The `ShopSet` ordering used by every other plugin
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ShopConfig>() {
            let config = ShopConfig::load_or_default(std::path::Path::new(ShopConfig::PATH));
            app.insert_resource(config);
        }

        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<OpenStore>()
            .add_event::<OpenCustomizer>()
            .add_event::<CloseWindow>()
            .add_event::<VendorInteraction>()
            .add_event::<BuyRequest>()
            .add_event::<SellRequest>()
            .add_event::<TransactionRejected>()
            .add_event::<CoinsChanged>()
            .add_event::<EquipRequest>()
            .add_event::<PreviewRequest>()
            .add_event::<ExitPreviewRequest>()
            .add_event::<ColorChangeRequest>()
            .add_event::<ChangePage>()
            .add_event::<OpenColorPicker>()
            .add_event::<PickerSlidersChanged>()
            .add_event::<CloseColorPicker>()
            .add_event::<SaveCharacter>()
            .add_event::<SaveRequest>()

            .configure_sets(
                Update,
                (
                    ShopSet::Windows,
                    ShopSet::Transactions,
                    ShopSet::Presentation,
                    ShopSet::Persist,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Leave Loading once the catalog and save data are in place
            .add_systems(
                Update,
                finish_loading.run_if(in_state(GameState::Loading)),
            );
    }
}

/// Transition to InGame when the startup loaders have inserted their resources.
fn finish_loading(
    catalog: Option<Res<BodyPartCatalog>>,
    inventory: Option<Res<PlayerInventory>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if catalog.is_some() && inventory.is_some() {
        info!("Catalog and inventory ready, entering game");
        next_state.set(GameState::InGame);
    }
}
