//! HSV colour picker for the customiser's mask swatches.
//!
//! Sliders work in `0.0..=1.0` for hue, saturation and value. Colour-space
//! conversion goes through `bevy::color`.

use bevy::color::{Hsva, Srgba};
use bevy::prelude::*;

use crate::inventory::MaskChannel;

/// Convert slider values to an opaque sRGB colour.
pub fn hsv_to_srgba(hue: f32, saturation: f32, value: f32) -> Srgba {
    Srgba::from(Hsva::new(hue.clamp(0.0, 1.0) * 360.0, saturation, value, 1.0))
}

/// Convert an sRGB colour to slider values.
pub fn srgba_to_hsv(color: Srgba) -> (f32, f32, f32) {
    let hsva = Hsva::from(color);
    ((hsva.hue / 360.0).rem_euclid(1.0), hsva.saturation, hsva.value)
}

/// Resource holding the picker's state.
#[derive(Resource, Debug, Clone)]
pub struct ColorPicker {
    /// Channel being edited; `None` while the picker is closed
    pub channel: Option<MaskChannel>,
    pub color: Srgba,
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Default for ColorPicker {
    fn default() -> Self {
        let color = Srgba::rgb(0.565, 0.565, 0.565);
        let (hue, saturation, value) = srgba_to_hsv(color);
        Self {
            channel: None,
            color,
            hue,
            saturation,
            value,
        }
    }
}

impl ColorPicker {
    pub fn is_open(&self) -> bool {
        self.channel.is_some()
    }

    /// Start editing `channel`, placing the sliders on `color`.
    pub fn open(&mut self, channel: MaskChannel, color: Srgba) {
        self.channel = Some(channel);
        self.color = color;
        self.sync_sliders();
    }

    pub fn close(&mut self) {
        self.channel = None;
    }

    /// Apply slider values and return the picked colour.
    pub fn set_sliders(&mut self, hue: f32, saturation: f32, value: f32) -> Srgba {
        self.color = hsv_to_srgba(hue, saturation, value);
        self.sync_sliders();
        self.color
    }

    /// Background of the saturation bar: full saturation at the current hue and value.
    pub fn saturation_background(&self) -> Srgba {
        hsv_to_srgba(self.hue, 1.0, self.value)
    }

    /// Background of the value bar: full value at the current hue and saturation.
    pub fn value_background(&self) -> Srgba {
        hsv_to_srgba(self.hue, self.saturation, 1.0)
    }

    fn sync_sliders(&mut self) {
        let (hue, saturation, value) = srgba_to_hsv(self.color);
        self.hue = hue;
        self.saturation = saturation;
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: Srgba, b: Srgba) {
        assert!(
            (a.red - b.red).abs() < EPSILON
                && (a.green - b.green).abs() < EPSILON
                && (a.blue - b.blue).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_primary_colours() {
        assert_close(hsv_to_srgba(0.0, 1.0, 1.0), Srgba::rgb(1.0, 0.0, 0.0));
        assert_close(hsv_to_srgba(0.5, 1.0, 1.0), Srgba::rgb(0.0, 1.0, 1.0));
        assert_close(hsv_to_srgba(0.25, 0.0, 0.5), Srgba::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_rgb_to_hsv() {
        let (h, s, v) = srgba_to_hsv(Srgba::rgb(0.0, 0.0, 1.0));
        assert!((h - 2.0 / 3.0).abs() < EPSILON);
        assert!((s - 1.0).abs() < EPSILON);
        assert!((v - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_default_is_grey_and_closed() {
        let picker = ColorPicker::default();
        assert!(!picker.is_open());
        assert!(picker.saturation.abs() < EPSILON);
        assert!((picker.value - 0.565).abs() < EPSILON);
    }

    #[test]
    fn test_open_places_sliders_on_colour() {
        let mut picker = ColorPicker::default();
        picker.open(MaskChannel::G, Srgba::rgb(1.0, 0.5, 0.0));

        assert_eq!(picker.channel, Some(MaskChannel::G));
        assert!((picker.hue - 30.0 / 360.0).abs() < EPSILON);
        assert!((picker.saturation - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_bar_backgrounds() {
        let mut picker = ColorPicker::default();
        picker.set_sliders(0.0, 0.5, 0.5);

        assert_close(picker.saturation_background(), Srgba::rgb(0.5, 0.0, 0.0));
        assert_close(picker.value_background(), Srgba::rgb(1.0, 0.5, 0.5));
    }
}
