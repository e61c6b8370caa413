use serde::{Deserialize, Serialize};

/// An 8-bit per channel color, as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGB {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A color in the device's own terms.
///
/// - `hue`: degrees, `0..360`.
/// - `saturation`: percent, `0..=100`.
/// - `lightness`: percent, `0..=100`. The device has no lightness property,
///   so this value is sent as brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl From<(u8, u8, u8)> for RGB {
    fn from(tuple: (u8, u8, u8)) -> Self {
        RGB {
            red: tuple.0,
            green: tuple.1,
            blue: tuple.2,
        }
    }
}

impl From<RGB> for (u8, u8, u8) {
    fn from(rgb: RGB) -> Self {
        (rgb.red, rgb.green, rgb.blue)
    }
}

impl From<RGB> for Hsl {
    fn from(rgb: RGB) -> Self {
        rgb_to_hsl(rgb.red, rgb.green, rgb.blue)
    }
}

/// Converts an RGB triple into the integer HSL triple the device understands.
///
/// Every component is rounded to the nearest integer, with ties away from zero.
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    let r = red as f64 / 255.0;
    let g = green as f64 / 255.0;
    let b = blue as f64 / 255.0;

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);

    let chroma = max - min;
    let lightness = (max + min) / 2.0;

    if chroma == 0.0 {
        return Hsl {
            hue: 0,
            saturation: 0,
            lightness: (100.0 * lightness).round() as u8,
        };
    }

    // Ties go to the first channel in r, g, b order.
    let sector = if max == r {
        (g - b) / chroma
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = (max - lightness) / lightness.min(1.0 - lightness);

    Hsl {
        // 359.5 and up rounds onto the same angle as 0.
        hue: (hue.round() as u16) % 360,
        saturation: (100.0 * saturation).round() as u8,
        lightness: (100.0 * lightness).round() as u8,
    }
}
