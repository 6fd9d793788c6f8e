//! Inventory module - owned variants, equipment and coins.

mod data;
mod masks;

pub use data::{EquippedPart, OwnedPart, PlayerInventory};
pub use masks::{ColorMasks, MaskChannel};
