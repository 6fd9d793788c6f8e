//! Catalog plugin - loads the body-part catalog at startup.

use bevy::prelude::*;

use super::data::{load_catalog_file, BodyPartCatalog, BodyPartType};
use crate::core::ShopConfig;

/// Catalog plugin - reads the authored catalog into a resource.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_catalog);
    }
}

/// Load the catalog named in the config. Leaves an existing catalog untouched.
pub fn load_catalog(
    mut commands: Commands,
    config: Res<ShopConfig>,
    existing: Option<Res<BodyPartCatalog>>,
) {
    if existing.is_some() {
        debug!("Catalog already present, skipping file load");
        return;
    }

    let catalog = match load_catalog_file(&config.catalog_path, config.random_price_range()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load body-part catalog: {}", e);
            BodyPartCatalog::default()
        }
    };

    for part_type in BodyPartType::ALL {
        if catalog.len(part_type) == 0 {
            warn!("Catalog has no {} variants", part_type);
        }
    }

    info!(
        "Loaded {} body-part variants",
        BodyPartType::ALL.iter().map(|&t| catalog.len(t)).sum::<usize>()
    );
    commands.insert_resource(catalog);
}
