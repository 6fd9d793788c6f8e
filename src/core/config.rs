//! Shop configuration resource.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::catalog::BodyPartType;

/// Tunable settings for catalog loading, saving and HUD animations.
///
/// Every field has a default, so a RON override only needs to name the
/// fields it changes.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// RON file holding the body-part catalog
    pub catalog_path: PathBuf,
    /// Directory the save file lives in
    pub save_dir: PathBuf,
    /// Save file name without extension
    pub save_name: String,
    /// Save file extension
    pub save_format: String,
    /// Coins granted when a save has an empty balance (inclusive)
    pub starting_coins: (u32, u32),
    /// Price rolled for catalog entries authored with price 0 (inclusive)
    pub random_price: (u32, u32),
    /// Seconds the coin counter takes to catch up with the balance
    pub coin_tween_secs: f32,
    /// Seconds a flying coin lives before despawning
    pub coin_flight_secs: f32,
    /// Categories the character has a slot for, with the variant equipped on first run
    pub default_loadout: Vec<(BodyPartType, usize)>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("assets/data/body_parts.ron"),
            save_dir: PathBuf::from("saves"),
            save_name: "data".to_string(),
            save_format: "json".to_string(),
            starting_coins: (500, 1500),
            random_price: (10, 100),
            coin_tween_secs: 1.0,
            coin_flight_secs: 1.0,
            default_loadout: BodyPartType::ALL.iter().map(|&t| (t, 0)).collect(),
        }
    }
}

impl ShopConfig {
    /// Default location of the optional override file.
    pub const PATH: &'static str = "assets/data/shop_config.ron";

    /// Load overrides from a RON file, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No shop config at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str::<ShopConfig>(&contents) {
                Ok(config) => {
                    info!("Loaded shop config from {:?}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse shop config {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read shop config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn starting_coins_range(&self) -> RangeInclusive<u32> {
        ordered_range(self.starting_coins)
    }

    pub fn random_price_range(&self) -> RangeInclusive<u32> {
        ordered_range(self.random_price)
    }
}

fn ordered_range((a, b): (u32, u32)) -> RangeInclusive<u32> {
    a.min(b)..=a.max(b)
}
