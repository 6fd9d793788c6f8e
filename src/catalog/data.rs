//! Body-part catalog data structures and RON loading.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use super::error::CatalogError;

// === Categories ===

/// A body-part category, i.e. one slot on the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPartType {
    Hair,
    Face,
    Head,
    Torso,
    Shoulder,
    Elbow,
    Wrist,
    Pelvis,
    Leg,
    Boot,
}

impl BodyPartType {
    pub const ALL: [BodyPartType; 10] = [
        BodyPartType::Hair,
        BodyPartType::Face,
        BodyPartType::Head,
        BodyPartType::Torso,
        BodyPartType::Shoulder,
        BodyPartType::Elbow,
        BodyPartType::Wrist,
        BodyPartType::Pelvis,
        BodyPartType::Leg,
        BodyPartType::Boot,
    ];

    /// Whether variants of this category come as a left/right pair.
    pub fn is_paired(&self) -> bool {
        matches!(
            self,
            BodyPartType::Shoulder
                | BodyPartType::Elbow
                | BodyPartType::Wrist
                | BodyPartType::Leg
                | BodyPartType::Boot
        )
    }
}

impl fmt::Display for BodyPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// === Variants ===

/// Which of a variant's two images to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Primary,
    Mirrored,
}

/// The mirrored half of a paired variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedSprite {
    pub sprite: String,
    /// Sort layer of the mirrored image (defaults to the primary layer)
    #[serde(default)]
    pub layer: Option<u32>,
}

/// One selectable option within a category, e.g. a hairstyle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPartVariant {
    /// Identifies the variant; unique within its category
    pub tag: String,
    /// Sort layer of the primary image
    pub layer: u32,
    /// Price in coins (0 in a catalog file means "roll one")
    #[serde(default)]
    pub price: u32,
    /// Vertical offset of the image inside a HUD item frame
    #[serde(default)]
    pub hud_offset_y: f32,
    /// Path of the primary image
    pub sprite: String,
    #[serde(default)]
    pub pair: Option<PairedSprite>,
}

impl BodyPartVariant {
    pub fn new(tag: impl Into<String>, layer: u32, sprite: impl Into<String>, price: u32) -> Self {
        Self {
            tag: tag.into(),
            layer,
            price,
            hud_offset_y: 0.0,
            sprite: sprite.into(),
            pair: None,
        }
    }

    /// Attach a mirrored image, turning this into a pair variant.
    pub fn with_pair(mut self, sprite: impl Into<String>, layer: Option<u32>) -> Self {
        self.pair = Some(PairedSprite {
            sprite: sprite.into(),
            layer,
        });
        self
    }

    pub fn is_pair(&self) -> bool {
        self.pair.is_some()
    }

    pub fn sprite(&self, side: Side) -> Option<&str> {
        match side {
            Side::Primary => Some(&self.sprite),
            Side::Mirrored => self.pair.as_ref().map(|p| p.sprite.as_str()),
        }
    }

    /// Sort layer of the mirrored image, if this is a pair.
    pub fn pair_layer(&self) -> Option<u32> {
        self.pair.as_ref().map(|p| p.layer.unwrap_or(self.layer))
    }
}

// === Catalog ===

/// Catalog file as authored in RON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BodyPartCatalogFile {
    #[serde(default)]
    pub parts: HashMap<BodyPartType, Vec<BodyPartVariant>>,
}

/// Resource holding every purchasable variant, per category.
///
/// Variant indices are stable identifiers stored in save files, so
/// catalogs are only ever appended to.
#[derive(Resource, Debug, Clone, Default)]
pub struct BodyPartCatalog {
    parts: HashMap<BodyPartType, Vec<BodyPartVariant>>,
}

impl BodyPartCatalog {
    /// Resolve an authored file: validate tags and pairs, roll missing prices.
    pub fn from_file(
        file: BodyPartCatalogFile,
        price_range: RangeInclusive<u32>,
    ) -> Result<Self, CatalogError> {
        let mut rng = rand::thread_rng();
        let mut parts = HashMap::new();

        for (part_type, mut variants) in file.parts {
            let mut seen = HashSet::new();
            for variant in &mut variants {
                if !seen.insert(variant.tag.clone()) {
                    return Err(CatalogError::DuplicateTag {
                        part_type,
                        tag: variant.tag.clone(),
                    });
                }
                if part_type.is_paired() && !variant.is_pair() {
                    return Err(CatalogError::MissingPairSprite {
                        part_type,
                        tag: variant.tag.clone(),
                    });
                }
                if !part_type.is_paired() && variant.is_pair() {
                    warn!(
                        "{} variant '{}' has a pair sprite that will be ignored",
                        part_type, variant.tag
                    );
                    variant.pair = None;
                }
                if variant.price == 0 {
                    variant.price = rng.gen_range(price_range.clone());
                    debug!("Rolled price {} for {} '{}'", variant.price, part_type, variant.tag);
                }
            }
            parts.insert(part_type, variants);
        }

        Ok(Self { parts })
    }

    /// Append a variant, returning its index.
    pub fn push(&mut self, part_type: BodyPartType, variant: BodyPartVariant) -> usize {
        let list = self.parts.entry(part_type).or_default();
        list.push(variant);
        list.len() - 1
    }

    /// Get a variant by category and index. Out-of-range ids return `None`.
    pub fn get(&self, part_type: BodyPartType, id: usize) -> Option<&BodyPartVariant> {
        self.parts.get(&part_type).and_then(|list| list.get(id))
    }

    pub fn variants(&self, part_type: BodyPartType) -> &[BodyPartVariant] {
        self.parts.get(&part_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, part_type: BodyPartType) -> usize {
        self.variants(part_type).len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.values().all(Vec::is_empty)
    }

    /// Index of the variant with the given tag.
    pub fn find_tag(&self, part_type: BodyPartType, tag: &str) -> Option<usize> {
        self.variants(part_type).iter().position(|v| v.tag == tag)
    }
}

/// Read and resolve a catalog RON file.
pub fn load_catalog_file(
    path: &Path,
    price_range: RangeInclusive<u32>,
) -> Result<BodyPartCatalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let file = ron::from_str::<BodyPartCatalogFile>(&contents).map_err(|e| {
        CatalogError::ParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        }
    })?;

    BodyPartCatalog::from_file(file, price_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(tag: &str, price: u32) -> BodyPartVariant {
        BodyPartVariant::new(tag, 5, format!("{tag}_l.png"), price)
            .with_pair(format!("{tag}_r.png"), Some(10))
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let mut catalog = BodyPartCatalog::default();
        catalog.push(BodyPartType::Hair, BodyPartVariant::new("bald", 13, "bald.png", 10));

        assert!(catalog.get(BodyPartType::Hair, 0).is_some());
        assert!(catalog.get(BodyPartType::Hair, 1).is_none());
        assert!(catalog.get(BodyPartType::Boot, 0).is_none());
        assert_eq!(catalog.len(BodyPartType::Boot), 0);
    }

    #[test]
    fn test_pair_layer_defaults_to_primary() {
        let variant = BodyPartVariant::new("leg", 2, "leg_l.png", 20).with_pair("leg_r.png", None);
        assert_eq!(variant.pair_layer(), Some(2));
        assert_eq!(variant.sprite(Side::Mirrored), Some("leg_r.png"));
        assert_eq!(BodyPartVariant::new("hair", 13, "hair.png", 1).pair_layer(), None);
    }

    #[test]
    fn test_from_file_rejects_duplicate_tags() {
        let mut file = BodyPartCatalogFile::default();
        file.parts.insert(
            BodyPartType::Face,
            vec![
                BodyPartVariant::new("smile", 12, "a.png", 10),
                BodyPartVariant::new("smile", 12, "b.png", 10),
            ],
        );

        let err = BodyPartCatalog::from_file(file, 10..=100).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTag { part_type: BodyPartType::Face, .. }));
    }

    #[test]
    fn test_from_file_requires_pairs_for_paired_categories() {
        let mut file = BodyPartCatalogFile::default();
        file.parts.insert(
            BodyPartType::Boot,
            vec![BodyPartVariant::new("boot", 1, "boot.png", 10)],
        );

        let err = BodyPartCatalog::from_file(file, 10..=100).unwrap_err();
        assert!(matches!(err, CatalogError::MissingPairSprite { .. }));
    }

    #[test]
    fn test_from_file_rolls_zero_prices_in_range() {
        let mut file = BodyPartCatalogFile::default();
        file.parts.insert(BodyPartType::Shoulder, vec![pair("pad", 0), pair("plate", 42)]);

        let catalog = BodyPartCatalog::from_file(file, 10..=100).unwrap();
        let rolled = catalog.get(BodyPartType::Shoulder, 0).unwrap().price;
        assert!((10..=100).contains(&rolled));
        assert_eq!(catalog.get(BodyPartType::Shoulder, 1).unwrap().price, 42);
    }

    #[test]
    fn test_parse_ron_catalog() {
        let source = r#"(
            parts: {
                Hair: [
                    (tag: "short", layer: 13, price: 30, hud_offset_y: -17.6,
                     sprite: "hair/short.png"),
                ],
                Elbow: [
                    (tag: "elbow_iron", layer: 4, price: 25, sprite: "elbow/iron_l.png",
                     pair: Some((sprite: "elbow/iron_r.png", layer: Some(9)))),
                ],
            },
        )"#;

        let file: BodyPartCatalogFile = ron::from_str(source).unwrap();
        let catalog = BodyPartCatalog::from_file(file, 10..=100).unwrap();

        assert_eq!(catalog.find_tag(BodyPartType::Hair, "short"), Some(0));
        let elbow = catalog.get(BodyPartType::Elbow, 0).unwrap();
        assert_eq!(elbow.pair_layer(), Some(9));
        assert_eq!(elbow.price, 25);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog_file(Path::new("missing/body_parts.ron"), 10..=100).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound(_)));
    }

    #[test]
    fn test_shipped_catalog_covers_every_category() {
        let catalog = load_catalog_file(Path::new("assets/data/body_parts.ron"), 10..=100).unwrap();
        for part_type in BodyPartType::ALL {
            assert!(catalog.len(part_type) > 0, "{part_type} has no variants");
            let first = &catalog.variants(part_type)[0];
            assert!((10..=100).contains(&first.price));
            assert_eq!(first.is_pair(), part_type.is_paired());
        }
    }
}
