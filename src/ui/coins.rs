//! Coin HUD - the animated balance counter and coins flying into it.

use bevy::prelude::*;

use crate::core::{CoinsChanged, GameState, ShopConfig, ShopSet, Tween};
use crate::inventory::PlayerInventory;

/// The balance shown in the HUD, catching up with the real one over time.
#[derive(Resource, Debug, Clone)]
pub struct CoinCounter {
    tween: Tween<u32>,
}

impl Default for CoinCounter {
    fn default() -> Self {
        Self::at(0)
    }
}

impl CoinCounter {
    /// A counter resting at `coins`.
    pub fn at(coins: u32) -> Self {
        Self {
            tween: Tween::new(coins, coins, 0.0),
        }
    }

    pub fn displayed(&self) -> u32 {
        self.tween.value()
    }

    pub fn target(&self) -> u32 {
        self.tween.to
    }

    /// Start counting from the displayed value toward `target`.
    pub fn retarget(&mut self, target: u32, duration: f32) {
        self.tween = Tween::new(self.displayed(), target, duration);
    }

    pub fn tick(&mut self, dt: f32) -> u32 {
        self.tween.advance(dt)
    }

    /// Four-digit, zero-padded label.
    pub fn text(&self) -> String {
        format!("{:04}", self.displayed())
    }
}

/// Screen position of the HUD coin icon that flying coins head for.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CoinIcon {
    pub position: Vec2,
}

/// Emits one flying coin per coin earned, spread over a second.
#[derive(Component, Debug, Clone)]
pub struct CoinBurst {
    pub origin: Vec2,
    pub remaining: u32,
    pub interval: f32,
    timer: f32,
}

impl CoinBurst {
    pub fn new(origin: Vec2, coins: u32) -> Self {
        Self {
            origin,
            remaining: coins,
            interval: if coins > 0 { 1.0 / coins as f32 } else { 0.0 },
            timer: 0.0,
        }
    }

    /// Advance by `dt` and return how many coins to launch now.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.timer -= dt;
        let mut launched = 0;
        while self.remaining > 0 && self.timer <= 0.0 {
            self.remaining -= 1;
            self.timer += self.interval;
            launched += 1;
        }
        launched
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// A single coin flying toward the coin icon.
#[derive(Component, Debug, Clone)]
pub struct CoinFlight {
    pub tween: Tween<Vec2>,
}

/// Setup coin HUD systems.
pub fn setup_coin_systems(app: &mut App) {
    app.init_resource::<CoinCounter>()
        .init_resource::<CoinIcon>()
        .add_systems(OnEnter(GameState::InGame), sync_coin_counter)
        .add_systems(
            Update,
            (react_to_coin_changes, tick_coin_counter, emit_coin_bursts, move_coin_flights)
                .chain()
                .in_set(ShopSet::Presentation),
        );
}

fn sync_coin_counter(mut counter: ResMut<CoinCounter>, inventory: Res<PlayerInventory>) {
    *counter = CoinCounter::at(inventory.coins);
}

fn react_to_coin_changes(
    mut commands: Commands,
    mut events: EventReader<CoinsChanged>,
    mut counter: ResMut<CoinCounter>,
    inventory: Res<PlayerInventory>,
    config: Res<ShopConfig>,
) {
    let mut changed = false;
    for event in events.read() {
        changed = true;
        if let (Some(origin), Ok(earned)) = (event.origin, u32::try_from(event.delta)) {
            if earned > 0 {
                commands.spawn(CoinBurst::new(origin, earned));
            }
        }
    }

    if changed {
        counter.retarget(inventory.coins, config.coin_tween_secs);
    }
}

fn tick_coin_counter(time: Res<Time>, mut counter: ResMut<CoinCounter>) {
    if counter.displayed() != counter.target() {
        counter.tick(time.delta_secs());
    }
}

fn emit_coin_bursts(
    mut commands: Commands,
    time: Res<Time>,
    icon: Res<CoinIcon>,
    config: Res<ShopConfig>,
    mut bursts: Query<(Entity, &mut CoinBurst)>,
) {
    for (entity, mut burst) in bursts.iter_mut() {
        for _ in 0..burst.tick(time.delta_secs()) {
            commands.spawn(CoinFlight {
                tween: Tween::new(burst.origin, icon.position, config.coin_flight_secs),
            });
        }
        if burst.is_done() {
            commands.entity(entity).despawn();
        }
    }
}

fn move_coin_flights(
    mut commands: Commands,
    time: Res<Time>,
    mut flights: Query<(Entity, &mut CoinFlight)>,
) {
    for (entity, mut flight) in flights.iter_mut() {
        flight.tween.advance(time.delta_secs());
        if flight.tween.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}
