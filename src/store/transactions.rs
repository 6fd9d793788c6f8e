//! Buying and selling body-part variants.

use bevy::prelude::*;

use super::error::StoreError;
use crate::catalog::{BodyPartCatalog, BodyPartType};
use crate::character::Wardrobe;
use crate::inventory::PlayerInventory;

/// Outcome of a completed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub part_type: BodyPartType,
    pub id: usize,
    pub price: u32,
    /// Balance after the transaction
    pub balance: u32,
}

impl Receipt {
    /// Signed balance change, negative for purchases.
    pub fn delta(&self, bought: bool) -> i64 {
        if bought {
            -(self.price as i64)
        } else {
            self.price as i64
        }
    }
}

/// Buy a variant: debit its price and record ownership.
pub fn buy(
    inventory: &mut PlayerInventory,
    catalog: &BodyPartCatalog,
    part_type: BodyPartType,
    id: usize,
) -> Result<Receipt, StoreError> {
    let variant = catalog
        .get(part_type, id)
        .ok_or(StoreError::UnknownVariant { part_type, id })?;

    if inventory.owns(part_type, id) {
        return Err(StoreError::AlreadyOwned { part_type, id });
    }

    if !inventory.try_debit(variant.price) {
        return Err(StoreError::InsufficientFunds {
            price: variant.price,
            balance: inventory.coins,
        });
    }

    inventory.add_owned(part_type, id);
    info!("Bought {} '{}' for {} coins", part_type, variant.tag, variant.price);

    Ok(Receipt {
        part_type,
        id,
        price: variant.price,
        balance: inventory.coins,
    })
}

/// Sell a variant back: credit its price, drop ownership and put the
/// first remaining variant of the category on the character.
pub fn sell(
    inventory: &mut PlayerInventory,
    wardrobe: &mut Wardrobe,
    catalog: &BodyPartCatalog,
    part_type: BodyPartType,
    id: usize,
) -> Result<Receipt, StoreError> {
    let variant = catalog
        .get(part_type, id)
        .ok_or(StoreError::UnknownVariant { part_type, id })?;

    if !inventory.owns(part_type, id) {
        return Err(StoreError::NotOwned { part_type, id });
    }

    if inventory.owned_count(part_type) <= 1 {
        return Err(StoreError::LastOwned(part_type));
    }

    inventory.credit(variant.price);
    inventory.remove_owned(part_type, id);
    info!("Sold {} '{}' for {} coins", part_type, variant.tag, variant.price);

    if let Some(fallback) = inventory.first_owned(part_type) {
        if let Err(e) = wardrobe.equip(catalog, part_type, fallback) {
            warn!("Could not re-equip {} after sale: {}", part_type, e);
        }
    }

    Ok(Receipt {
        part_type,
        id,
        price: variant.price,
        balance: inventory.coins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BodyPartVariant;
    use crate::character::SlotState;
    use crate::inventory::{ColorMasks, EquippedPart};

    fn setup(coins: u32) -> (PlayerInventory, Wardrobe, BodyPartCatalog) {
        let mut catalog = BodyPartCatalog::default();
        for (i, price) in [10, 40, 75].into_iter().enumerate() {
            catalog.push(
                BodyPartType::Hair,
                BodyPartVariant::new(format!("hair{i}"), 13, format!("hair{i}.png"), price),
            );
        }

        let mut inventory = PlayerInventory { coins, ..default() };
        inventory.ensure_defaults(&[EquippedPart::new(
            BodyPartType::Hair,
            0,
            ColorMasks::default(),
        )]);
        let wardrobe = Wardrobe::from_equipped(&inventory.body_parts_equipped);
        (inventory, wardrobe, catalog)
    }

    #[test]
    fn test_buy_debits_and_adds_ownership() {
        let (mut inventory, _, catalog) = setup(100);

        let receipt = buy(&mut inventory, &catalog, BodyPartType::Hair, 1).unwrap();
        assert_eq!(receipt.price, 40);
        assert_eq!(receipt.balance, 60);
        assert_eq!(receipt.delta(true), -40);
        assert!(inventory.owns(BodyPartType::Hair, 1));
    }

    #[test]
    fn test_buy_with_insufficient_funds_changes_nothing() {
        let (mut inventory, _, catalog) = setup(74);
        let before = inventory.clone();

        let err = buy(&mut inventory, &catalog, BodyPartType::Hair, 2).unwrap_err();
        assert_eq!(err, StoreError::InsufficientFunds { price: 75, balance: 74 });
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_buy_exact_balance() {
        let (mut inventory, _, catalog) = setup(75);
        let receipt = buy(&mut inventory, &catalog, BodyPartType::Hair, 2).unwrap();
        assert_eq!(receipt.balance, 0);
    }

    #[test]
    fn test_buy_rejects_owned_and_unknown() {
        let (mut inventory, _, catalog) = setup(500);

        assert_eq!(
            buy(&mut inventory, &catalog, BodyPartType::Hair, 0).unwrap_err(),
            StoreError::AlreadyOwned { part_type: BodyPartType::Hair, id: 0 }
        );
        assert_eq!(
            buy(&mut inventory, &catalog, BodyPartType::Hair, 3).unwrap_err(),
            StoreError::UnknownVariant { part_type: BodyPartType::Hair, id: 3 }
        );
        assert_eq!(inventory.coins, 500);
    }

    #[test]
    fn test_sell_last_owned_is_rejected() {
        let (mut inventory, mut wardrobe, catalog) = setup(0);

        let err = sell(&mut inventory, &mut wardrobe, &catalog, BodyPartType::Hair, 0).unwrap_err();
        assert_eq!(err, StoreError::LastOwned(BodyPartType::Hair));
        assert_eq!(inventory.owned_count(BodyPartType::Hair), 1);
        assert_eq!(inventory.coins, 0);
    }

    #[test]
    fn test_sell_not_owned_is_rejected() {
        let (mut inventory, mut wardrobe, catalog) = setup(0);
        let err = sell(&mut inventory, &mut wardrobe, &catalog, BodyPartType::Hair, 2).unwrap_err();
        assert!(matches!(err, StoreError::NotOwned { .. }));
    }

    #[test]
    fn test_buy_then_sell_restores_balance() {
        let (mut inventory, mut wardrobe, catalog) = setup(300);

        buy(&mut inventory, &catalog, BodyPartType::Hair, 2).unwrap();
        let receipt = sell(&mut inventory, &mut wardrobe, &catalog, BodyPartType::Hair, 2).unwrap();

        assert_eq!(receipt.balance, 300);
        assert!(!inventory.owns(BodyPartType::Hair, 2));
    }

    #[test]
    fn test_sell_reequips_first_remaining() {
        let (mut inventory, mut wardrobe, catalog) = setup(300);
        buy(&mut inventory, &catalog, BodyPartType::Hair, 1).unwrap();
        buy(&mut inventory, &catalog, BodyPartType::Hair, 2).unwrap();
        wardrobe.equip(&catalog, BodyPartType::Hair, 2).unwrap();

        sell(&mut inventory, &mut wardrobe, &catalog, BodyPartType::Hair, 0).unwrap();

        assert_eq!(wardrobe.slot(BodyPartType::Hair).unwrap().state, SlotState::Equipped(1));
    }
}
