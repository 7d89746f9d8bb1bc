//! HSV color triple with per-channel limits and RGB conversion
//!
//! Hue is measured in degrees on `[0, 360)`; saturation and brightness
//! (value) live on `[0, 1]`. Tiles keep their color in HSV so saturation and
//! brightness can be swept globally without touching hue.

use std::fmt;

/// Upper limit of the hue channel in degrees
pub const HUE_LIMIT: f64 = 360.0;

/// One of the three HSV channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Hue in degrees
    Hue,
    /// Saturation on the unit interval
    Saturation,
    /// Brightness (value) on the unit interval
    Brightness,
}

impl Channel {
    /// All channels in storage order
    pub const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Brightness];

    /// Largest value the channel may take
    pub const fn limit(self) -> f64 {
        match self {
            Self::Hue => HUE_LIMIT,
            Self::Saturation | Self::Brightness => 1.0,
        }
    }

    /// Position of the channel inside an HSV triple
    pub const fn index(self) -> usize {
        match self {
            Self::Hue => 0,
            Self::Saturation => 1,
            Self::Brightness => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Brightness => "brightness",
        };
        f.write_str(name)
    }
}

/// Color expressed as hue, saturation and brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    /// Hue in degrees, `[0, 360)`
    pub hue: f64,
    /// Saturation, `[0, 1]`
    pub saturation: f64,
    /// Brightness, `[0, 1]`
    pub brightness: f64,
}

impl Default for HsvColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl HsvColor {
    /// Pure white: any hue, no saturation, full brightness
    pub const WHITE: Self = Self::new(0.0, 0.0, 1.0);

    /// Pure black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from its three channels
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Read a single channel
    pub const fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Brightness => self.brightness,
        }
    }

    /// Overwrite a single channel
    pub const fn set_channel(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Hue => self.hue = value,
            Channel::Saturation => self.saturation = value,
            Channel::Brightness => self.brightness = value,
        }
    }

    /// Whether the color renders as pure white regardless of hue
    // Exact comparison: white is assigned literally, never computed
    #[allow(clippy::float_cmp)]
    pub const fn is_white(&self) -> bool {
        self.saturation == 0.0 && self.brightness == 1.0
    }

    /// Convert to 8-bit RGB using the standard hexcone model
    pub fn to_rgb8(&self) -> [u8; 3] {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(HUE_LIMIT) / 60.0;

        let chroma = v * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let to_byte = |component: f64| ((component + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_byte(r), to_byte(g), to_byte(b)]
    }

    /// Convert to opaque 8-bit RGBA
    pub fn to_rgba8(&self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [r, g, b, u8::MAX]
    }
}
