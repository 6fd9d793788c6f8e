//! UI module - HUD state that the views bind to.

mod coins;
mod color_picker;
mod customizer;
mod plugin;
mod windows;

pub use coins::{CoinBurst, CoinCounter, CoinFlight, CoinIcon};
pub use color_picker::{hsv_to_srgba, srgba_to_hsv, ColorPicker};
pub use customizer::{owned_entries, CustomizerEntries, CustomizerPage, OwnedEntry};
pub use plugin::UiPlugin;
