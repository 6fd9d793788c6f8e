//! Global events used for cross-system communication.
//!
//! The HUD, the store and the character never call each other directly.
//! A store button sends a `BuyRequest`, the store systems answer with
//! `CoinsChanged` and `SaveRequest`, and the coin counter and save systems
//! pick those up independently.

use bevy::color::Srgba;
use bevy::prelude::*;

use crate::catalog::BodyPartType;
use crate::inventory::MaskChannel;
use crate::store::StoreError;

// === Windows ===

/// Open the store for a body-part category.
#[derive(Event, Debug, Clone, Copy)]
pub struct OpenStore {
    pub part_type: BodyPartType,
}

/// Open the character customiser window.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct OpenCustomizer;

/// Close whichever window is open and return to exploring.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CloseWindow;

/// The player interacted with a vendor entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct VendorInteraction {
    pub vendor: Entity,
}

// === Store ===

/// Buy a variant from the store.
#[derive(Event, Debug, Clone, Copy)]
pub struct BuyRequest {
    pub part_type: BodyPartType,
    pub id: usize,
}

/// Sell an owned variant back to the store.
#[derive(Event, Debug, Clone, Copy)]
pub struct SellRequest {
    pub part_type: BodyPartType,
    pub id: usize,
    /// Screen position of the item's coin icon, where earned coins fly from
    pub origin: Option<Vec2>,
}

/// Sent when a buy or sell was refused.
#[derive(Event, Debug, Clone)]
pub struct TransactionRejected {
    pub part_type: BodyPartType,
    pub id: usize,
    pub reason: StoreError,
}

/// Sent whenever the coin balance moved.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinsChanged {
    /// Signed change applied to the balance
    pub delta: i64,
    /// Screen position coins fly from (sales only)
    pub origin: Option<Vec2>,
}

// === Character ===

/// Equip a variant in its slot.
#[derive(Event, Debug, Clone, Copy)]
pub struct EquipRequest {
    pub part_type: BodyPartType,
    pub id: usize,
}

/// Temporarily show a variant, e.g. while hovering a store item.
#[derive(Event, Debug, Clone, Copy)]
pub struct PreviewRequest {
    pub part_type: BodyPartType,
    pub id: usize,
}

/// Roll a slot back to what was equipped before the preview.
#[derive(Event, Debug, Clone, Copy)]
pub struct ExitPreviewRequest {
    pub part_type: BodyPartType,
}

/// Replace one colour mask channel of a slot.
#[derive(Event, Debug, Clone, Copy)]
pub struct ColorChangeRequest {
    pub part_type: BodyPartType,
    pub channel: MaskChannel,
    pub color: Srgba,
}

// === Customiser HUD ===

/// Switch the customiser to another body-part page.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChangePage {
    pub part_type: BodyPartType,
}

/// Open the colour picker for one mask channel of the current page.
#[derive(Event, Debug, Clone, Copy)]
pub struct OpenColorPicker {
    pub channel: MaskChannel,
}

/// The colour picker sliders moved. All values are in `0.0..=1.0`.
#[derive(Event, Debug, Clone, Copy)]
pub struct PickerSlidersChanged {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

/// Close the colour picker.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CloseColorPicker;

/// Confirm the customised character and leave the customiser.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SaveCharacter;

// === Persistence ===

/// Ask for the inventory to be written to disk. Coalesced per frame.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SaveRequest;
