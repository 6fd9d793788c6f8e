//! Core game module - states, events, configuration and shared helpers.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod states;
mod tween;

pub use config::ShopConfig;
pub use events::*;
pub use plugin::{CorePlugin, ShopSet};
pub use states::*;
pub use tween::*;
