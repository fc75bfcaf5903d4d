//! Thread palette and color math

use crate::screening::ThreadId;
use serde::{Deserialize, Serialize};

/// An RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a 0xRRGGBB hex value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Linear interpolation towards `other`, t in [0, 1]
    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Hex values of the fixed three-thread palette: red, green, blue
pub const THREAD_PALETTE: [u32; 3] = [0xEE1111, 0x11EE11, 0x1111EE];

/// Solid color for a narrative thread
pub fn thread_color(thread: ThreadId) -> Rgb {
    Rgb::from_hex(THREAD_PALETTE[thread.index()])
}

/// Palette color for a raw cycle offset. Offsets 1 and 2 map to green and
/// blue, everything else falls through to red; the prism's vertex coloring
/// feeds this a mod-4 cycle, so offset 3 repeats red.
pub fn palette_color(offset: usize) -> Rgb {
    match offset {
        1 => Rgb::from_hex(THREAD_PALETTE[1]),
        2 => Rgb::from_hex(THREAD_PALETTE[2]),
        _ => Rgb::from_hex(THREAD_PALETTE[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_hex() {
        let red = Rgb::from_hex(0xEE1111);
        assert_relative_eq!(red.r, 0xEE as f32 / 255.0);
        assert_relative_eq!(red.g, 0x11 as f32 / 255.0);
        assert_relative_eq!(red.b, 0x11 as f32 / 255.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0.0, 0.5, 1.0);
        let b = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.g, 0.25);
        assert_relative_eq!(mid.b, 0.5);
    }

    #[test]
    fn test_palette_cycle_repeats_red() {
        assert_eq!(palette_color(0), palette_color(3));
        assert_ne!(palette_color(1), palette_color(0));
        assert_ne!(palette_color(2), palette_color(1));
    }

    #[test]
    fn test_thread_colors_match_palette() {
        assert_eq!(thread_color(ThreadId::One), palette_color(0));
        assert_eq!(thread_color(ThreadId::Two), palette_color(1));
        assert_eq!(thread_color(ThreadId::Three), palette_color(2));
    }
}
