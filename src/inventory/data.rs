//! The player's persisted inventory: coins, owned variants, equipment.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::masks::ColorMasks;
use crate::catalog::BodyPartType;

/// Ownership record of a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedPart {
    #[serde(rename = "type")]
    pub part_type: BodyPartType,
    pub id: usize,
}

impl OwnedPart {
    pub fn new(part_type: BodyPartType, id: usize) -> Self {
        Self { part_type, id }
    }
}

/// What a slot wears and how it is tinted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquippedPart {
    #[serde(rename = "type")]
    pub part_type: BodyPartType,
    pub id: usize,
    #[serde(flatten)]
    pub masks: ColorMasks,
}

impl EquippedPart {
    pub fn new(part_type: BodyPartType, id: usize, masks: ColorMasks) -> Self {
        Self { part_type, id, masks }
    }
}

/// Resource holding everything that goes into the save file.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInventory {
    pub coins: u32,
    #[serde(default)]
    pub body_parts: Vec<OwnedPart>,
    #[serde(default)]
    pub body_parts_equipped: Vec<EquippedPart>,
}

impl PlayerInventory {
    /// Ids of the owned variants of a category, in acquisition order.
    pub fn owned_ids(&self, part_type: BodyPartType) -> Vec<usize> {
        self.body_parts
            .iter()
            .filter(|p| p.part_type == part_type)
            .map(|p| p.id)
            .collect()
    }

    pub fn owns(&self, part_type: BodyPartType, id: usize) -> bool {
        self.body_parts.contains(&OwnedPart::new(part_type, id))
    }

    pub fn owned_count(&self, part_type: BodyPartType) -> usize {
        self.body_parts.iter().filter(|p| p.part_type == part_type).count()
    }

    pub fn first_owned(&self, part_type: BodyPartType) -> Option<usize> {
        self.body_parts.iter().find(|p| p.part_type == part_type).map(|p| p.id)
    }

    /// Record ownership. Returns false if it was already owned.
    pub fn add_owned(&mut self, part_type: BodyPartType, id: usize) -> bool {
        if self.owns(part_type, id) {
            return false;
        }
        self.body_parts.push(OwnedPart::new(part_type, id));
        true
    }

    /// Drop ownership. Returns false if it was not owned.
    pub fn remove_owned(&mut self, part_type: BodyPartType, id: usize) -> bool {
        let Some(index) = self
            .body_parts
            .iter()
            .position(|p| p.part_type == part_type && p.id == id)
        else {
            return false;
        };
        self.body_parts.remove(index);
        true
    }

    /// Remove duplicate ownership records, keeping the first. Returns how many were dropped.
    pub fn dedup(&mut self) -> usize {
        let before = self.body_parts.len();
        let mut seen = std::collections::HashSet::new();
        self.body_parts.retain(|p| seen.insert(*p));
        before - self.body_parts.len()
    }

    pub fn equipped(&self, part_type: BodyPartType) -> Option<&EquippedPart> {
        self.body_parts_equipped.iter().find(|e| e.part_type == part_type)
    }

    pub fn credit(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Take `amount` coins if the balance covers it.
    pub fn try_debit(&mut self, amount: u32) -> bool {
        match self.coins.checked_sub(amount) {
            Some(rest) => {
                self.coins = rest;
                true
            }
            None => false,
        }
    }

    /// Keep only the first equipped entry of each category. Returns how many were dropped.
    pub fn dedup_equipped(&mut self) -> usize {
        let before = self.body_parts_equipped.len();
        let mut seen = std::collections::HashSet::new();
        self.body_parts_equipped.retain(|e| seen.insert(e.part_type));
        before - self.body_parts_equipped.len()
    }

    /// Fill in a fresh or partial save from the default loadout.
    ///
    /// Empty owned/equipped lists are seeded from `loadout`, slots missing
    /// from the equipped list are added, and every loadout category ends up
    /// with at least one owned variant. Duplicate records are dropped.
    pub fn ensure_defaults(&mut self, loadout: &[EquippedPart]) {
        let dropped = self.dedup_equipped();
        if dropped > 0 {
            warn!("Removed {} duplicate equipped body parts", dropped);
        }

        if self.body_parts.is_empty() {
            self.body_parts = loadout.iter().map(|e| OwnedPart::new(e.part_type, e.id)).collect();
        }

        for default in loadout {
            if self.owned_count(default.part_type) == 0 {
                self.body_parts.push(OwnedPart::new(default.part_type, default.id));
            }
            if self.equipped(default.part_type).is_none() {
                let id = self.first_owned(default.part_type).unwrap_or(default.id);
                self.body_parts_equipped.push(EquippedPart { id, ..*default });
            }
        }

        let dropped = self.dedup();
        if dropped > 0 {
            warn!("Removed {} duplicate owned body parts", dropped);
        }
    }
}
