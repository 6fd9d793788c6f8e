//! Catalog module - the purchasable body-part variants.

mod data;
mod error;
mod plugin;

pub use data::{
    load_catalog_file, BodyPartCatalog, BodyPartCatalogFile, BodyPartType, BodyPartVariant,
    PairedSprite, Side,
};
pub use error::CatalogError;
pub use plugin::{load_catalog, CatalogPlugin};
