//! Character customiser HUD - page selection, owned variants, mask swatches.

use bevy::color::Srgba;
use bevy::prelude::*;

use super::color_picker::ColorPicker;
use crate::catalog::{BodyPartCatalog, BodyPartType, Side};
use crate::character::Wardrobe;
use crate::core::{
    ChangePage, CloseColorPicker, CloseWindow, ColorChangeRequest, OpenColorPicker,
    PickerSlidersChanged, PlayState, SaveCharacter, SaveRequest, ShopSet,
};
use crate::inventory::{MaskChannel, PlayerInventory};

/// The customiser's current page and its three mask swatches.
#[derive(Resource, Debug, Clone)]
pub struct CustomizerPage {
    pub part_type: BodyPartType,
    pub swatches: [Srgba; 3],
}

impl Default for CustomizerPage {
    fn default() -> Self {
        Self {
            part_type: BodyPartType::Hair,
            swatches: [Srgba::WHITE; 3],
        }
    }
}

impl CustomizerPage {
    pub fn swatch(&self, channel: MaskChannel) -> Srgba {
        self.swatches[channel as usize]
    }

    /// Point the page at `part_type` and copy its slot colours.
    pub fn show(&mut self, part_type: BodyPartType, wardrobe: &Wardrobe) {
        self.part_type = part_type;
        self.swatches = MaskChannel::ALL.map(|c| wardrobe.color(part_type, c));
    }
}

/// An owned variant offered on the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedEntry {
    pub id: usize,
    pub tag: String,
    pub sprite: String,
    pub pair_sprite: Option<String>,
    pub hud_offset_y: f32,
    pub equipped: bool,
}

/// Owned variants of the current page, in acquisition order.
#[derive(Resource, Debug, Clone, Default)]
pub struct CustomizerEntries(pub Vec<OwnedEntry>);

pub fn owned_entries(
    catalog: &BodyPartCatalog,
    inventory: &PlayerInventory,
    wardrobe: &Wardrobe,
    part_type: BodyPartType,
) -> Vec<OwnedEntry> {
    let equipped = wardrobe.slot(part_type).map(|s| s.state.committed());
    inventory
        .owned_ids(part_type)
        .into_iter()
        .filter_map(|id| {
            let Some(variant) = catalog.get(part_type, id) else {
                warn!("Owned {} {} is missing from the catalog", part_type, id);
                return None;
            };
            Some(OwnedEntry {
                id,
                tag: variant.tag.clone(),
                sprite: variant.sprite.clone(),
                pair_sprite: variant.sprite(Side::Mirrored).map(str::to_string),
                hud_offset_y: variant.hud_offset_y,
                equipped: equipped == Some(id),
            })
        })
        .collect()
}

/// Setup customiser systems.
pub fn setup_customizer_systems(app: &mut App) {
    app.init_resource::<CustomizerPage>()
        .init_resource::<CustomizerEntries>()
        .init_resource::<ColorPicker>()
        .add_systems(OnEnter(PlayState::Customizing), show_current_page)
        .add_systems(OnExit(PlayState::Customizing), close_picker_on_exit)
        .add_systems(
            Update,
            (
                handle_page_changes,
                handle_open_color_picker,
                handle_picker_sliders,
                handle_close_color_picker,
                handle_save_character,
            )
                .chain()
                .in_set(ShopSet::Windows),
        )
        .add_systems(Update, refresh_customizer_entries.in_set(ShopSet::Presentation));
}

fn show_current_page(mut page: ResMut<CustomizerPage>, wardrobe: Res<Wardrobe>) {
    let part_type = page.part_type;
    page.show(part_type, &wardrobe);
}

fn close_picker_on_exit(mut picker: ResMut<ColorPicker>) {
    picker.close();
}

fn handle_page_changes(
    mut events: EventReader<ChangePage>,
    mut page: ResMut<CustomizerPage>,
    mut picker: ResMut<ColorPicker>,
    wardrobe: Res<Wardrobe>,
) {
    if let Some(event) = events.read().last() {
        page.show(event.part_type, &wardrobe);
        picker.close();
    }
}

fn handle_open_color_picker(
    mut events: EventReader<OpenColorPicker>,
    page: Res<CustomizerPage>,
    mut picker: ResMut<ColorPicker>,
) {
    if let Some(event) = events.read().last() {
        picker.open(event.channel, page.swatch(event.channel));
    }
}

/// Slider moves recolour the swatch and the character slot.
fn handle_picker_sliders(
    mut events: EventReader<PickerSlidersChanged>,
    mut page: ResMut<CustomizerPage>,
    mut picker: ResMut<ColorPicker>,
    mut color_changes: EventWriter<ColorChangeRequest>,
) {
    for event in events.read() {
        let Some(channel) = picker.channel else {
            debug!("Slider change with the colour picker closed");
            continue;
        };
        let color = picker.set_sliders(event.hue, event.saturation, event.value);
        page.swatches[channel as usize] = color;
        color_changes.send(ColorChangeRequest {
            part_type: page.part_type,
            channel,
            color,
        });
    }
}

fn handle_close_color_picker(
    mut events: EventReader<CloseColorPicker>,
    mut picker: ResMut<ColorPicker>,
) {
    if events.read().count() > 0 {
        picker.close();
    }
}

fn handle_save_character(
    mut events: EventReader<SaveCharacter>,
    mut close: EventWriter<CloseWindow>,
    mut save: EventWriter<SaveRequest>,
) {
    if events.read().count() > 0 {
        close.send(CloseWindow);
        save.send(SaveRequest);
    }
}

fn refresh_customizer_entries(
    page: Res<CustomizerPage>,
    catalog: Res<BodyPartCatalog>,
    inventory: Res<PlayerInventory>,
    wardrobe: Res<Wardrobe>,
    mut entries: ResMut<CustomizerEntries>,
) {
    if !page.is_changed() && !inventory.is_changed() && !wardrobe.is_changed() {
        return;
    }
    entries.0 = owned_entries(&catalog, &inventory, &wardrobe, page.part_type);
}
