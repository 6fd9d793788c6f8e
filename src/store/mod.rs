//! Store module - vendors and the coin economy.

mod error;
mod listing;
mod plugin;
mod transactions;

pub use error::StoreError;
pub use listing::{ActiveStore, StoreEntry, StoreListing};
pub use plugin::{StorePlugin, Vendor};
pub use transactions::{buy, sell, Receipt};
