use {
    crate::{
        catalog::{BodyPartCatalog, BodyPartType, BodyPartVariant},
        character::{CharacterSprites, SlotState, Wardrobe},
        core::*,
        inventory::{ColorMasks, EquippedPart, MaskChannel, OwnedPart, PlayerInventory},
        persistence::{load_inventory, save_inventory, scratch_dir, SaveLocation},
        store::{ActiveStore, StoreError, StoreListing, Vendor},
        ui::{CoinBurst, CoinCounter, CoinFlight, ColorPicker, CustomizerPage},
        AvatarShopPlugin,
    },
    bevy::{color::Srgba, prelude::*, state::app::StatesPlugin, time::TimeUpdateStrategy},
    std::{fs, path::PathBuf, time::Duration},
};

const LOADOUT: [BodyPartType; 3] = [BodyPartType::Hair, BodyPartType::Torso, BodyPartType::Boot];

/// Three variants per category priced 10, 60 and 250, named `hair0`, `boot2_l` etc.
fn test_catalog() -> BodyPartCatalog {
    let mut catalog = BodyPartCatalog::default();
    for part_type in BodyPartType::ALL {
        let name = part_type.to_string().to_lowercase();
        for (i, price) in [10, 60, 250].into_iter().enumerate() {
            let tag = format!("{name}{i}");
            let variant = if part_type.is_paired() {
                BodyPartVariant::new(&tag, 1, format!("{tag}_l.png"), price)
                    .with_pair(format!("{tag}_r.png"), None)
            } else {
                BodyPartVariant::new(&tag, 7, format!("{tag}.png"), price)
            };
            catalog.push(part_type, variant);
        }
    }
    catalog
}

fn test_config(save_dir: PathBuf) -> ShopConfig {
    ShopConfig {
        save_dir,
        starting_coins: (200, 200),
        default_loadout: LOADOUT.iter().map(|&t| (t, 0)).collect(),
        ..default()
    }
}

/// Headless app with a fixed catalog, still in `Loading`.
fn build_app(config: ShopConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(config)
        .insert_resource(test_catalog())
        .add_plugins(AvatarShopPlugin);
    app
}

/// Headless app over a scratch save directory, already in game.
fn test_app(name: &str) -> App {
    let mut app = build_app(test_config(scratch_dir(name)));
    enter_game(&mut app);
    app
}

fn enter_game(app: &mut App) {
    for _ in 0..5 {
        app.update();
        if *app.world().resource::<State<GameState>>().get() == GameState::InGame {
            // One more frame so OnEnter systems' commands are applied
            app.update();
            return;
        }
    }
    panic!("Never left loading");
}

fn send<E: Event>(app: &mut App, event: E) {
    app.world_mut().send_event(event);
    app.update();
}

/// Events are only swapped on fixed-update ticks, so this can include
/// rejections from earlier frames too.
fn rejections(app: &App) -> Vec<StoreError> {
    let events = app.world().resource::<Events<TransactionRejected>>();
    events.iter_current_update_events().map(|e| e.reason.clone()).collect()
}

fn hair_state(app: &App) -> SlotState {
    app.world().resource::<Wardrobe>().slot(BodyPartType::Hair).unwrap().state
}

fn play_state(app: &App) -> PlayState {
    *app.world().resource::<State<PlayState>>().get()
}

fn count<C: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&C>();
    query.iter(app.world()).count()
}

#[test]
fn test_first_run_seeds_inventory_and_wardrobe() {
    let app = test_app("first_run");

    let inventory = app.world().resource::<PlayerInventory>();
    assert_eq!(inventory.coins, 200);
    for part_type in LOADOUT {
        assert_eq!(inventory.owned_ids(part_type), vec![0]);
    }

    let wardrobe = app.world().resource::<Wardrobe>();
    assert_eq!(wardrobe.slots().len(), 3);
    assert_eq!(app.world().resource::<CoinCounter>().displayed(), 200);

    // Hair + torso + both boot halves
    assert_eq!(app.world().resource::<CharacterSprites>().layers.len(), 4);
}

#[test]
fn test_buy_and_sell_through_events() {
    let mut app = test_app("buy_sell");

    send(&mut app, BuyRequest { part_type: BodyPartType::Hair, id: 1 });
    {
        let inventory = app.world().resource::<PlayerInventory>();
        assert_eq!(inventory.coins, 140);
        assert!(inventory.owns(BodyPartType::Hair, 1));
    }

    send(
        &mut app,
        SellRequest {
            part_type: BodyPartType::Hair,
            id: 1,
            origin: None,
        },
    );
    let inventory = app.world().resource::<PlayerInventory>();
    assert_eq!(inventory.coins, 200);
    assert!(!inventory.owns(BodyPartType::Hair, 1));
}

#[test]
fn test_rejected_purchase_leaves_balance() {
    let mut app = test_app("poor");

    send(&mut app, BuyRequest { part_type: BodyPartType::Torso, id: 2 });

    assert_eq!(app.world().resource::<PlayerInventory>().coins, 200);
    let expected = StoreError::InsufficientFunds { price: 250, balance: 200 };
    assert!(rejections(&app).contains(&expected));
}

#[test]
fn test_selling_last_variant_is_rejected_for_every_category() {
    let config = ShopConfig {
        default_loadout: BodyPartType::ALL.iter().map(|&t| (t, 0)).collect(),
        ..test_config(scratch_dir("last_owned"))
    };
    let mut app = build_app(config);
    enter_game(&mut app);

    for part_type in BodyPartType::ALL {
        send(&mut app, SellRequest { part_type, id: 0, origin: None });
        assert!(rejections(&app).contains(&StoreError::LastOwned(part_type)));

        let inventory = app.world().resource::<PlayerInventory>();
        assert_eq!(inventory.owned_count(part_type), 1);
        assert_eq!(inventory.coins, 200);
    }
}

#[test]
fn test_store_preview_rolls_back_on_hover_exit() {
    let mut app = test_app("preview");

    send(&mut app, PreviewRequest { part_type: BodyPartType::Hair, id: 2 });
    assert_eq!(hair_state(&app), SlotState::Previewing { preview: 2, previous: 0 });

    let layers = &app.world().resource::<CharacterSprites>().layers;
    assert!(layers.iter().any(|l| l.sprite == "hair2.png"));

    send(&mut app, ExitPreviewRequest { part_type: BodyPartType::Hair });
    assert_eq!(hair_state(&app), SlotState::Equipped(0));
}

#[test]
fn test_closing_store_clears_previews() {
    let mut app = test_app("close_store");

    send(&mut app, OpenStore { part_type: BodyPartType::Hair });
    app.update();
    assert_eq!(play_state(&app), PlayState::Shopping);
    assert!(play_state(&app).is_focused());
    assert_eq!(app.world().resource::<StoreListing>().entries.len(), 3);

    send(&mut app, PreviewRequest { part_type: BodyPartType::Hair, id: 1 });
    send(&mut app, CloseWindow);
    app.update();

    assert_eq!(play_state(&app), PlayState::Exploring);
    assert_eq!(hair_state(&app), SlotState::Equipped(0));
    assert_eq!(app.world().resource::<StoreListing>().part_type, None);
}

#[test]
fn test_close_wins_over_open_in_the_same_frame() {
    let mut app = test_app("open_and_close");

    app.world_mut().send_event(OpenStore { part_type: BodyPartType::Hair });
    send(&mut app, CloseWindow);
    app.update();

    assert_eq!(play_state(&app), PlayState::Exploring);
    assert_eq!(*app.world().resource::<ActiveStore>(), ActiveStore(None));
    assert_eq!(app.world().resource::<StoreListing>().part_type, None);
}

#[test]
fn test_customizer_replaces_open_store() {
    let mut app = test_app("store_to_customizer");

    send(&mut app, OpenStore { part_type: BodyPartType::Boot });
    app.update();
    assert_eq!(app.world().resource::<StoreListing>().part_type, Some(BodyPartType::Boot));

    send(&mut app, OpenCustomizer);
    app.update();

    assert_eq!(play_state(&app), PlayState::Customizing);
    assert_eq!(*app.world().resource::<ActiveStore>(), ActiveStore(None));
    assert!(app.world().resource::<StoreListing>().entries.is_empty());
}

#[test]
fn test_vendor_opens_its_store() {
    let mut app = test_app("vendor");
    let vendor = app
        .world_mut()
        .spawn(Vendor { store_type: BodyPartType::Boot })
        .id();

    send(&mut app, VendorInteraction { vendor });
    // The window switch may only see the forwarded OpenStore next frame
    app.update();
    app.update();

    assert_eq!(play_state(&app), PlayState::Shopping);
    let listing = app.world().resource::<StoreListing>();
    assert_eq!(listing.part_type, Some(BodyPartType::Boot));
    assert_eq!(listing.title(), "Boot Store");
    assert!(listing.entries[0].purchased);
    assert!(!listing.entries[1].purchased);
}

#[test]
fn test_equip_requires_ownership() {
    let mut app = test_app("equip");

    send(&mut app, EquipRequest { part_type: BodyPartType::Hair, id: 1 });
    assert_eq!(hair_state(&app), SlotState::Equipped(0));

    send(&mut app, BuyRequest { part_type: BodyPartType::Hair, id: 1 });
    send(&mut app, EquipRequest { part_type: BodyPartType::Hair, id: 1 });
    assert_eq!(hair_state(&app), SlotState::Equipped(1));
}

#[test]
fn test_colour_picker_tints_current_page() {
    let mut app = test_app("picker");

    send(&mut app, OpenCustomizer);
    send(&mut app, ChangePage { part_type: BodyPartType::Torso });
    send(&mut app, OpenColorPicker { channel: MaskChannel::B });
    assert!(app.world().resource::<ColorPicker>().is_open());

    send(&mut app, PickerSlidersChanged { hue: 0.0, saturation: 1.0, value: 1.0 });

    let wardrobe = app.world().resource::<Wardrobe>();
    let color = wardrobe.color(BodyPartType::Torso, MaskChannel::B);
    assert!((color.red - 1.0).abs() < 1e-4);
    assert!(color.green.abs() < 1e-4);
    assert_eq!(wardrobe.color(BodyPartType::Torso, MaskChannel::R), Srgba::WHITE);
    assert_eq!(app.world().resource::<CustomizerPage>().swatch(MaskChannel::B), color);
}

#[test]
fn test_sale_sends_coins_flying_to_the_icon() {
    let config = ShopConfig {
        coin_flight_secs: 10.0,
        ..test_config(scratch_dir("coin_flights"))
    };
    let mut app = build_app(config);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    enter_game(&mut app);

    let origin = Vec2::new(120.0, -40.0);
    send(&mut app, CoinsChanged { delta: 4, origin: Some(origin) });
    // One coin every quarter second
    for _ in 0..8 {
        app.update();
    }

    assert_eq!(count::<CoinBurst>(&mut app), 0);
    assert_eq!(count::<CoinFlight>(&mut app), 4);
    let mut flights = app.world_mut().query::<&CoinFlight>();
    for flight in flights.iter(app.world()) {
        assert_eq!(flight.tween.from, origin);
        assert_eq!(flight.tween.to, Vec2::ZERO);
    }

    // Ten seconds of flight
    for _ in 0..45 {
        app.update();
    }
    assert_eq!(count::<CoinFlight>(&mut app), 0);
}

#[test]
fn test_purchase_spawns_no_coin_flights() {
    let mut app = test_app("no_flights");

    send(&mut app, BuyRequest { part_type: BodyPartType::Hair, id: 1 });
    app.update();

    assert_eq!(count::<CoinBurst>(&mut app), 0);
    assert_eq!(count::<CoinFlight>(&mut app), 0);
    assert_eq!(app.world().resource::<CoinCounter>().target(), 140);
}

#[test]
fn test_save_character_persists_equipment_and_colours() {
    let mut app = test_app("save_character");

    send(&mut app, BuyRequest { part_type: BodyPartType::Boot, id: 2 });
    send(&mut app, BuyRequest { part_type: BodyPartType::Boot, id: 1 });
    send(&mut app, EquipRequest { part_type: BodyPartType::Boot, id: 1 });
    send(
        &mut app,
        ColorChangeRequest {
            part_type: BodyPartType::Boot,
            channel: MaskChannel::R,
            color: Srgba::new(0.5, 0.25, 0.0, 1.0),
        },
    );
    send(&mut app, PreviewRequest { part_type: BodyPartType::Boot, id: 2 });
    send(&mut app, SaveCharacter);

    let location = app.world().resource::<SaveLocation>().clone();
    let saved = load_inventory(&location).unwrap();
    let boot = saved.equipped(BodyPartType::Boot).unwrap();

    // The hover preview is not what gets saved
    assert_eq!(boot.id, 1);
    assert_eq!(boot.masks.r, Srgba::new(0.5, 0.25, 0.0, 1.0));
    // Only the 60 coin boots could be afforded
    assert_eq!(saved.coins, 140);
    assert!(!saved.owns(BodyPartType::Boot, 2));
    assert_eq!(&saved, app.world().resource::<PlayerInventory>());
}

#[test]
fn test_existing_save_is_loaded() {
    let dir = scratch_dir("existing_save");
    let location = SaveLocation::new(dir.clone(), "data", "json");

    let mut saved = PlayerInventory { coins: 999, ..default() };
    for part_type in LOADOUT {
        saved.add_owned(part_type, 0);
    }
    saved.add_owned(BodyPartType::Hair, 2);
    save_inventory(&location, &saved).unwrap();

    let mut app = build_app(test_config(dir));
    enter_game(&mut app);

    let inventory = app.world().resource::<PlayerInventory>();
    assert_eq!(inventory.coins, 999);
    assert_eq!(inventory.owned_ids(BodyPartType::Hair), vec![0, 2]);
    // Equipment was missing from the save and is filled from the loadout
    assert_eq!(inventory.body_parts_equipped.len(), LOADOUT.len());
}

#[test]
fn test_duplicate_equipped_entries_load_as_one_slot() {
    let dir = scratch_dir("duplicate_equipped");
    let location = SaveLocation::new(dir.clone(), "data", "json");

    let saved = PlayerInventory {
        coins: 50,
        body_parts: vec![
            OwnedPart::new(BodyPartType::Hair, 0),
            OwnedPart::new(BodyPartType::Hair, 1),
            OwnedPart::new(BodyPartType::Torso, 0),
            OwnedPart::new(BodyPartType::Boot, 0),
        ],
        body_parts_equipped: vec![
            EquippedPart::new(BodyPartType::Hair, 0, ColorMasks::default()),
            EquippedPart::new(BodyPartType::Hair, 1, ColorMasks::default()),
        ],
    };
    save_inventory(&location, &saved).unwrap();

    let mut app = build_app(test_config(dir));
    enter_game(&mut app);

    let wardrobe = app.world().resource::<Wardrobe>();
    let hair_slots = wardrobe
        .slots()
        .iter()
        .filter(|s| s.part_type == BodyPartType::Hair)
        .count();
    assert_eq!(hair_slots, 1);
    assert_eq!(hair_state(&app), SlotState::Equipped(0));

    let layers = &app.world().resource::<CharacterSprites>().layers;
    assert!(layers.iter().any(|l| l.sprite == "hair0.png"));
    assert!(!layers.iter().any(|l| l.sprite == "hair1.png"));
}

#[test]
fn test_corrupt_save_starts_fresh() {
    let dir = scratch_dir("corrupt_save");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("data.json"), "{ \"coins\": ").unwrap();

    let mut app = build_app(test_config(dir));
    enter_game(&mut app);

    let inventory = app.world().resource::<PlayerInventory>();
    assert_eq!(inventory.coins, 200);
    for part_type in LOADOUT {
        assert_eq!(inventory.owned_ids(part_type), vec![0]);
        assert_eq!(inventory.equipped(part_type).map(|e| e.id), Some(0));
    }
    assert_eq!(app.world().resource::<Wardrobe>().slots().len(), LOADOUT.len());
}
