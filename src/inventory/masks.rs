//! Per-slot colour masks.
//!
//! Each equipped body part is tinted by three colours, one per RGB channel
//! of its mask texture. Changing a channel replaces that colour outright.

use bevy::color::Srgba;
use serde::{Deserialize, Serialize};

/// One of the three mask channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskChannel {
    R,
    G,
    B,
}

impl MaskChannel {
    pub const ALL: [MaskChannel; 3] = [MaskChannel::R, MaskChannel::G, MaskChannel::B];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Shader parameter the channel colour is bound to.
    pub fn shader_param(&self) -> &'static str {
        match self {
            MaskChannel::R => "_R",
            MaskChannel::G => "_G",
            MaskChannel::B => "_B",
        }
    }
}

/// The three channel colours of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMasks {
    #[serde(rename = "rMask")]
    pub r: Srgba,
    #[serde(rename = "gMask")]
    pub g: Srgba,
    #[serde(rename = "bMask")]
    pub b: Srgba,
}

impl Default for ColorMasks {
    fn default() -> Self {
        Self::uniform(Srgba::WHITE)
    }
}

impl ColorMasks {
    pub fn new(r: Srgba, g: Srgba, b: Srgba) -> Self {
        Self { r, g, b }
    }

    pub fn uniform(color: Srgba) -> Self {
        Self::new(color, color, color)
    }

    pub fn get(&self, channel: MaskChannel) -> Srgba {
        match channel {
            MaskChannel::R => self.r,
            MaskChannel::G => self.g,
            MaskChannel::B => self.b,
        }
    }

    pub fn set(&mut self, channel: MaskChannel, color: Srgba) {
        match channel {
            MaskChannel::R => self.r = color,
            MaskChannel::G => self.g = color,
            MaskChannel::B => self.b = color,
        }
    }

    /// Channel colour with alpha forced to 1, as shown in HUD swatches.
    pub fn opaque(&self, channel: MaskChannel) -> Srgba {
        Srgba {
            alpha: 1.0,
            ..self.get(channel)
        }
    }

    /// `(shader parameter, colour)` pairs, in R, G, B order.
    pub fn shader_params(&self) -> [(&'static str, Srgba); 3] {
        MaskChannel::ALL.map(|c| (c.shader_param(), self.get(c)))
    }
}
