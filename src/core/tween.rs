//! Time-based interpolation used by the coin counter and coin flights.

use bevy::prelude::*;

/// A linear interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub elapsed: f32,
    /// Duration in seconds (values <= 0 finish immediately)
    pub duration: f32,
}

impl<T: Lerp + Copy> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Normalized progress, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> T {
        self.from.lerp_to(self.to, self.progress())
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed += dt;
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Lerp for u32 {
    fn lerp_to(self, to: Self, t: f32) -> Self {
        let value = self as f64 + (to as f64 - self as f64) * t as f64;
        value.round().max(0.0) as u32
    }
}
