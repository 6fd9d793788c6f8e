//! Character plugin - wardrobe setup and equip/preview/colour requests.

use bevy::prelude::*;

use super::wardrobe::{SpriteLayer, Wardrobe};
use crate::catalog::BodyPartCatalog;
use crate::core::{
    ColorChangeRequest, EquipRequest, ExitPreviewRequest, GameState, PreviewRequest, ShopSet,
};
use crate::inventory::PlayerInventory;

/// Resolved images for the whole character, rebuilt whenever the wardrobe changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct CharacterSprites {
    pub layers: Vec<SpriteLayer>,
}

/// Character plugin - owns the `Wardrobe` and applies requests to it.
pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Wardrobe>()
            .init_resource::<CharacterSprites>()
            .add_systems(OnEnter(GameState::InGame), build_wardrobe)
            .add_systems(
                Update,
                (
                    handle_equip_requests,
                    handle_preview_requests,
                    handle_exit_preview_requests,
                    handle_color_changes,
                )
                    .chain()
                    .in_set(ShopSet::Transactions),
            )
            .add_systems(Update, refresh_character_sprites.in_set(ShopSet::Presentation));
    }
}

/// Build the slots from the loaded inventory.
pub fn build_wardrobe(mut commands: Commands, inventory: Res<PlayerInventory>) {
    let wardrobe = Wardrobe::from_equipped(&inventory.body_parts_equipped);
    info!("Character has {} slots", wardrobe.slots().len());
    commands.insert_resource(wardrobe);
}

/// Equip requests come from the customiser, which only offers owned variants.
fn handle_equip_requests(
    mut events: EventReader<EquipRequest>,
    catalog: Res<BodyPartCatalog>,
    inventory: Res<PlayerInventory>,
    mut wardrobe: ResMut<Wardrobe>,
) {
    for event in events.read() {
        if !inventory.owns(event.part_type, event.id) {
            warn!("Cannot equip {} {}: not owned", event.part_type, event.id);
            continue;
        }
        match wardrobe.equip(&catalog, event.part_type, event.id) {
            Ok(()) => debug!("Equipped {} {}", event.part_type, event.id),
            Err(e) => warn!("Equip failed: {}", e),
        }
    }
}

fn handle_preview_requests(
    mut events: EventReader<PreviewRequest>,
    catalog: Res<BodyPartCatalog>,
    mut wardrobe: ResMut<Wardrobe>,
) {
    for event in events.read() {
        if let Err(e) = wardrobe.preview(&catalog, event.part_type, event.id) {
            warn!("Preview failed: {}", e);
        }
    }
}

fn handle_exit_preview_requests(
    mut events: EventReader<ExitPreviewRequest>,
    mut wardrobe: ResMut<Wardrobe>,
) {
    for event in events.read() {
        if let Err(e) = wardrobe.exit_preview(event.part_type) {
            warn!("Exit preview failed: {}", e);
        }
    }
}

fn handle_color_changes(
    mut events: EventReader<ColorChangeRequest>,
    mut wardrobe: ResMut<Wardrobe>,
) {
    for event in events.read() {
        if let Err(e) = wardrobe.set_mask(event.part_type, event.channel, event.color) {
            warn!("Colour change failed: {}", e);
        }
    }
}

fn refresh_character_sprites(
    wardrobe: Res<Wardrobe>,
    catalog: Res<BodyPartCatalog>,
    mut sprites: ResMut<CharacterSprites>,
) {
    if !wardrobe.is_changed() && !catalog.is_changed() {
        return;
    }
    sprites.layers = wardrobe.sprite_layers(&catalog);
}
