//! Character module - the customisable avatar.

mod plugin;
mod wardrobe;

pub use plugin::{build_wardrobe, CharacterPlugin, CharacterSprites};
pub use wardrobe::{Slot, SlotState, SpriteLayer, Wardrobe, WardrobeError};
