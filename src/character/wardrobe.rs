//! The character's slots: what is equipped, what is being previewed, and
//! how each slot is tinted.

use bevy::color::Srgba;
use bevy::prelude::*;
use thiserror::Error;

use crate::catalog::{BodyPartCatalog, BodyPartType, Side};
use crate::inventory::{ColorMasks, EquippedPart, MaskChannel};

/// Errors raised by wardrobe edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WardrobeError {
    /// The catalog has no variant at this index.
    #[error("No {part_type} variant with id {id}")]
    UnknownVariant { part_type: BodyPartType, id: usize },

    /// The character has no slot for this category.
    #[error("Character has no {0} slot")]
    MissingSlot(BodyPartType),
}

/// Equip state of a single slot.
///
/// A preview remembers what was equipped before it so that leaving the
/// preview restores it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Equipped(usize),
    Previewing { preview: usize, previous: usize },
}

impl SlotState {
    /// The variant currently shown on the character.
    pub fn displayed(&self) -> usize {
        match *self {
            SlotState::Equipped(id) => id,
            SlotState::Previewing { preview, .. } => preview,
        }
    }

    /// The variant that is actually equipped, ignoring any preview.
    pub fn committed(&self) -> usize {
        match *self {
            SlotState::Equipped(id) => id,
            SlotState::Previewing { previous, .. } => previous,
        }
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self, SlotState::Previewing { .. })
    }
}

/// One category position on the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub part_type: BodyPartType,
    pub state: SlotState,
    pub masks: ColorMasks,
}

/// A single image to draw for the character.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteLayer {
    pub part_type: BodyPartType,
    pub side: Side,
    pub sprite: String,
    pub sort_order: u32,
    pub masks: ColorMasks,
}

/// Resource holding the live state of every slot.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Wardrobe {
    slots: Vec<Slot>,
}

impl Wardrobe {
    /// Build the slots from the saved equipment list.
    pub fn from_equipped(equipped: &[EquippedPart]) -> Self {
        Self {
            slots: equipped
                .iter()
                .map(|e| Slot {
                    part_type: e.part_type,
                    state: SlotState::Equipped(e.id),
                    masks: e.masks,
                })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, part_type: BodyPartType) -> Option<&Slot> {
        self.slots.iter().find(|s| s.part_type == part_type)
    }

    fn slot_mut(&mut self, part_type: BodyPartType) -> Result<&mut Slot, WardrobeError> {
        self.slots
            .iter_mut()
            .find(|s| s.part_type == part_type)
            .ok_or(WardrobeError::MissingSlot(part_type))
    }

    fn check_variant(
        catalog: &BodyPartCatalog,
        part_type: BodyPartType,
        id: usize,
    ) -> Result<(), WardrobeError> {
        match catalog.get(part_type, id) {
            Some(_) => Ok(()),
            None => Err(WardrobeError::UnknownVariant { part_type, id }),
        }
    }

    /// Equip a variant, dropping any pending preview.
    pub fn equip(
        &mut self,
        catalog: &BodyPartCatalog,
        part_type: BodyPartType,
        id: usize,
    ) -> Result<(), WardrobeError> {
        Self::check_variant(catalog, part_type, id)?;
        self.slot_mut(part_type)?.state = SlotState::Equipped(id);
        Ok(())
    }

    /// Show a variant without equipping it.
    ///
    /// Previewing again while a preview is active keeps the originally
    /// equipped variant as the rollback target.
    pub fn preview(
        &mut self,
        catalog: &BodyPartCatalog,
        part_type: BodyPartType,
        id: usize,
    ) -> Result<(), WardrobeError> {
        Self::check_variant(catalog, part_type, id)?;
        let slot = self.slot_mut(part_type)?;
        slot.state = SlotState::Previewing {
            preview: id,
            previous: slot.state.committed(),
        };
        Ok(())
    }

    /// Leave a preview and restore the equipped variant. No-op when not previewing.
    pub fn exit_preview(&mut self, part_type: BodyPartType) -> Result<(), WardrobeError> {
        let slot = self.slot_mut(part_type)?;
        slot.state = SlotState::Equipped(slot.state.committed());
        Ok(())
    }

    /// Leave every active preview.
    pub fn exit_all_previews(&mut self) {
        for slot in &mut self.slots {
            slot.state = SlotState::Equipped(slot.state.committed());
        }
    }

    pub fn set_mask(
        &mut self,
        part_type: BodyPartType,
        channel: MaskChannel,
        color: Srgba,
    ) -> Result<(), WardrobeError> {
        self.slot_mut(part_type)?.masks.set(channel, color);
        Ok(())
    }

    pub fn set_masks(
        &mut self,
        part_type: BodyPartType,
        masks: ColorMasks,
    ) -> Result<(), WardrobeError> {
        self.slot_mut(part_type)?.masks = masks;
        Ok(())
    }

    /// Opaque channel colour of a slot; white if the slot does not exist.
    pub fn color(&self, part_type: BodyPartType, channel: MaskChannel) -> Srgba {
        self.slot(part_type)
            .map(|s| s.masks.opaque(channel))
            .unwrap_or(Srgba::WHITE)
    }

    /// The committed equipment, as stored in the save file.
    pub fn equipped_snapshot(&self) -> Vec<EquippedPart> {
        self.slots
            .iter()
            .map(|s| EquippedPart::new(s.part_type, s.state.committed(), s.masks))
            .collect()
    }

    /// Every image to draw, pair variants contributing their mirrored half.
    pub fn sprite_layers(&self, catalog: &BodyPartCatalog) -> Vec<SpriteLayer> {
        let mut layers = Vec::with_capacity(self.slots.len() * 2);
        for slot in &self.slots {
            let id = slot.state.displayed();
            let Some(variant) = catalog.get(slot.part_type, id) else {
                warn!("{} slot shows unknown variant {}", slot.part_type, id);
                continue;
            };

            layers.push(SpriteLayer {
                part_type: slot.part_type,
                side: Side::Primary,
                sprite: variant.sprite.clone(),
                sort_order: variant.layer,
                masks: slot.masks,
            });

            let mirrored = (variant.sprite(Side::Mirrored), variant.pair_layer());
            if let (Some(sprite), Some(layer)) = mirrored {
                layers.push(SpriteLayer {
                    part_type: slot.part_type,
                    side: Side::Mirrored,
                    sprite: sprite.to_string(),
                    sort_order: layer,
                    masks: slot.masks,
                });
            }
        }
        layers
    }
}
