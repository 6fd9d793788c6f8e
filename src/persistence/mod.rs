//! Persistence module - the JSON save file.

mod error;
mod io;
mod plugin;

pub use error::PersistenceError;
pub use io::{load_inventory, save_inventory, SaveLocation};
pub use plugin::{load_player_inventory, PersistencePlugin};

#[cfg(test)]
pub(crate) use io::tests::scratch_dir;
