//! Error types for store transactions.

use thiserror::Error;

use crate::catalog::BodyPartType;

/// Reasons a buy or sell is refused. A refused transaction changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The catalog has no variant at this index.
    #[error("No {part_type} variant with id {id}")]
    UnknownVariant { part_type: BodyPartType, id: usize },

    /// Balance is below the price.
    #[error("Not enough coins: price {price}, balance {balance}")]
    InsufficientFunds { price: u32, balance: u32 },

    /// Buying something the player already has.
    #[error("{part_type} {id} is already owned")]
    AlreadyOwned { part_type: BodyPartType, id: usize },

    /// Selling something the player does not have.
    #[error("{part_type} {id} is not owned")]
    NotOwned { part_type: BodyPartType, id: usize },

    /// Selling the only variant left in a category.
    #[error("Cannot sell the last owned {0}")]
    LastOwned(BodyPartType),
}
