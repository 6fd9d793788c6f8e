//! What the open store shows.

use bevy::prelude::*;

use crate::catalog::{BodyPartCatalog, BodyPartType, Side};
use crate::inventory::PlayerInventory;

/// A single item frame in the store window.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntry {
    pub id: usize,
    pub tag: String,
    pub price: u32,
    pub hud_offset_y: f32,
    pub sprite: String,
    pub pair_sprite: Option<String>,
    /// Purchased entries offer "sell", the rest "buy"
    pub purchased: bool,
}

/// The category of the currently open store.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveStore(pub Option<BodyPartType>);

/// Resource holding the entries of the open store.
#[derive(Resource, Debug, Clone, Default)]
pub struct StoreListing {
    pub part_type: Option<BodyPartType>,
    pub entries: Vec<StoreEntry>,
}

impl StoreListing {
    pub fn build(
        catalog: &BodyPartCatalog,
        inventory: &PlayerInventory,
        part_type: BodyPartType,
    ) -> Self {
        let entries = catalog
            .variants(part_type)
            .iter()
            .enumerate()
            .map(|(id, variant)| StoreEntry {
                id,
                tag: variant.tag.clone(),
                price: variant.price,
                hud_offset_y: variant.hud_offset_y,
                sprite: variant.sprite.clone(),
                pair_sprite: variant.sprite(Side::Mirrored).map(str::to_string),
                purchased: inventory.owns(part_type, id),
            })
            .collect();

        Self {
            part_type: Some(part_type),
            entries,
        }
    }

    pub fn title(&self) -> String {
        match self.part_type {
            Some(part_type) => format!("{} Store", part_type),
            None => String::new(),
        }
    }

    pub fn entry(&self, id: usize) -> Option<&StoreEntry> {
        self.entries.get(id)
    }
}
