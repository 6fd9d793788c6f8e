//! Store plugin - vendors, buy/sell requests and the open store's listing.

use bevy::prelude::*;

use super::listing::{ActiveStore, StoreListing};
use super::transactions::{buy, sell};
use crate::catalog::{BodyPartCatalog, BodyPartType};
use crate::character::Wardrobe;
use crate::core::{
    BuyRequest, CloseWindow, CoinsChanged, OpenStore, PlayState, SaveRequest, SellRequest, ShopSet,
    TransactionRejected, VendorInteraction,
};
use crate::inventory::PlayerInventory;

/// A vendor in the world selling one body-part category.
#[derive(Component, Debug, Clone, Copy)]
pub struct Vendor {
    pub store_type: BodyPartType,
}

/// Store plugin - handles transactions for the open store.
pub struct StorePlugin;

impl Plugin for StorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveStore>()
            .init_resource::<StoreListing>()
            .add_systems(
                Update,
                (handle_vendor_interactions, track_active_store)
                    .chain()
                    .in_set(ShopSet::Windows),
            )
            .add_systems(
                Update,
                (handle_buy_requests, handle_sell_requests)
                    .chain()
                    .in_set(ShopSet::Transactions),
            )
            .add_systems(Update, refresh_store_listing.in_set(ShopSet::Presentation))
            .add_systems(OnExit(PlayState::Shopping), clear_active_store);
    }
}

/// Turn a vendor interaction into a request to open that vendor's store.
fn handle_vendor_interactions(
    mut interactions: EventReader<VendorInteraction>,
    vendors: Query<&Vendor>,
    mut open_store: EventWriter<OpenStore>,
) {
    for interaction in interactions.read() {
        let Ok(vendor) = vendors.get(interaction.vendor) else {
            warn!("Interaction with {:?}, which is not a vendor", interaction.vendor);
            continue;
        };
        info!("Open {} store", vendor.store_type);
        open_store.send(OpenStore {
            part_type: vendor.store_type,
        });
    }
}

/// Follow the store requests with the same priority as the window switch:
/// a close in the same frame wins over an open.
fn track_active_store(
    mut opened: EventReader<OpenStore>,
    mut closed: EventReader<CloseWindow>,
    mut active: ResMut<ActiveStore>,
) {
    let last_opened = opened.read().last().map(|e| e.part_type);
    if closed.read().count() > 0 {
        active.0 = None;
    } else if let Some(part_type) = last_opened {
        active.0 = Some(part_type);
    }
}

/// Any window replacing the store closes it.
fn clear_active_store(mut active: ResMut<ActiveStore>) {
    active.0 = None;
}

fn handle_buy_requests(
    mut requests: EventReader<BuyRequest>,
    catalog: Res<BodyPartCatalog>,
    mut inventory: ResMut<PlayerInventory>,
    mut coins_changed: EventWriter<CoinsChanged>,
    mut rejected: EventWriter<TransactionRejected>,
    mut save: EventWriter<SaveRequest>,
) {
    for request in requests.read() {
        match buy(&mut inventory, &catalog, request.part_type, request.id) {
            Ok(receipt) => {
                coins_changed.send(CoinsChanged {
                    delta: receipt.delta(true),
                    origin: None,
                });
                save.send(SaveRequest);
            }
            Err(reason) => {
                warn!("Purchase of {} {} refused: {}", request.part_type, request.id, reason);
                rejected.send(TransactionRejected {
                    part_type: request.part_type,
                    id: request.id,
                    reason,
                });
            }
        }
    }
}

fn handle_sell_requests(
    mut requests: EventReader<SellRequest>,
    catalog: Res<BodyPartCatalog>,
    mut inventory: ResMut<PlayerInventory>,
    mut wardrobe: ResMut<Wardrobe>,
    mut coins_changed: EventWriter<CoinsChanged>,
    mut rejected: EventWriter<TransactionRejected>,
    mut save: EventWriter<SaveRequest>,
) {
    for request in requests.read() {
        match sell(&mut inventory, &mut wardrobe, &catalog, request.part_type, request.id) {
            Ok(receipt) => {
                coins_changed.send(CoinsChanged {
                    delta: receipt.delta(false),
                    origin: request.origin,
                });
                save.send(SaveRequest);
            }
            Err(reason) => {
                warn!("Sale of {} {} refused: {}", request.part_type, request.id, reason);
                rejected.send(TransactionRejected {
                    part_type: request.part_type,
                    id: request.id,
                    reason,
                });
            }
        }
    }
}

/// Rebuild the listing when the store changes or something was bought/sold.
fn refresh_store_listing(
    active: Res<ActiveStore>,
    catalog: Res<BodyPartCatalog>,
    inventory: Res<PlayerInventory>,
    mut listing: ResMut<StoreListing>,
) {
    if !active.is_changed() && !inventory.is_changed() {
        return;
    }

    *listing = match active.0 {
        Some(part_type) => StoreListing::build(&catalog, &inventory, part_type),
        None => StoreListing::default(),
    };
}
