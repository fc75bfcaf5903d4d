//! Alpha-mask texture synthesis
//!
//! The mask is a square greyscale raster unwrapped over the prism: the three
//! facets sit side by side along the horizontal axis, elapsed screening time
//! runs top to bottom. Each scanline looks up its active scene segment and
//! lights the facet spanning the segment's primary and secondary edges with
//! a directional gradient; every other pixel stays at the base value. All
//! four channels carry the same value, locking alpha and luminance together.

use toblerone_core::{total_length, Error, Result, Scene};

/// Parameters for mask generation
#[derive(Debug, Clone)]
pub struct MaskConfig {
    /// Raster width and height in pixels
    pub size: u32,
    /// Gradient value at the facet edge nearest the primary thread
    pub high_bound: f64,
    /// Gradient value at the facet edge nearest the secondary thread
    pub mid_bound: f64,
    /// Value written outside the transition facet
    pub base_value: f64,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            high_bound: 256.0,
            mid_bound: 192.0,
            base_value: 0.0,
        }
    }
}

/// A square RGBA raster with all channels equal
#[derive(Debug, Clone)]
pub struct AlphaMask {
    pub size: u32,
    /// Row-major RGBA bytes, `size * size * 4` long
    pub pixels: Vec<u8>,
}

impl AlphaMask {
    /// Mask value at a pixel (the shared channel value)
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        self.pixels[((y * self.size + x) * 4) as usize]
    }

    /// Full RGBA value at a pixel
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }
}

/// Generate the transition mask for an ordered scene list.
pub fn generate_mask(scenes: &[Scene], config: &MaskConfig) -> Result<AlphaMask> {
    if scenes.is_empty() {
        return Err(Error::EmptyScreening);
    }

    let size = config.size as usize;
    let facet_width = config.size as f64 / 3.0;
    let gradient_span = config.high_bound - config.mid_bound;
    let total = total_length(scenes) as f64;

    let mut pixels = vec![0u8; size * size * 4];
    for row in 0..size {
        // the reference scanline counter advances before sampling, so row r
        // samples the time fraction (r + 1) / size
        let proportion = (row + 1) as f64 / size as f64;
        let mut progress = total * proportion;
        let mut active = None;
        for scene in scenes {
            progress -= scene.length as f64;
            if progress <= 0.0 {
                active = Some(scene);
                break;
            }
        }
        // rounding at the final rows can leave the walk without a hit
        let segment = active.unwrap_or_else(|| scenes.last().unwrap());
        let primary = segment.primary.index();
        let secondary = segment.secondary.index();

        for x in 0..size {
            let edge1 = (x as f64 / facet_width).floor() as usize;
            let edge2 = (edge1 + 1) % 3;
            let frac = (x as f64 % facet_width) / facet_width;

            let value = if edge1 == primary && edge2 == secondary {
                (1.0 - frac) * gradient_span + config.mid_bound
            } else if edge1 == secondary && edge2 == primary {
                frac * gradient_span + config.mid_bound
            } else {
                config.base_value
            };

            let byte = value.round().clamp(0.0, 255.0) as u8;
            let offset = (row * size + x) * 4;
            pixels[offset..offset + 4].copy_from_slice(&[byte; 4]);
        }
    }

    Ok(AlphaMask {
        size: config.size,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use toblerone_core::ThreadId;

    fn single_scene() -> Vec<Scene> {
        vec![Scene::new(10, ThreadId::One, ThreadId::Two)]
    }

    #[test]
    fn test_forward_gradient_ramps_down_across_facet() {
        let mask = generate_mask(&single_scene(), &MaskConfig::default()).unwrap();
        // facet 0 spans the primary->secondary edge pair: high bound at the
        // facet start, mid bound approaching the facet boundary
        assert_eq!(mask.luminance(0, 100), 255);
        assert_eq!(mask.luminance(341, 100), 192);
        assert!(mask.luminance(0, 100) > mask.luminance(170, 100));
        assert!(mask.luminance(170, 100) > mask.luminance(341, 100));
    }

    #[test]
    fn test_reversed_pair_ramps_up_across_facet() {
        let scenes = vec![Scene::new(10, ThreadId::Two, ThreadId::One)];
        let mask = generate_mask(&scenes, &MaskConfig::default()).unwrap();
        assert_eq!(mask.luminance(0, 100), 192);
        assert_eq!(mask.luminance(341, 100), 255);
    }

    #[test]
    fn test_unmatched_facets_stay_at_base() {
        let mask = generate_mask(&single_scene(), &MaskConfig::default()).unwrap();
        // facets 1 and 2 touch neither edge pair of the (One, Two) scene
        assert_eq!(mask.luminance(342, 100), 0);
        assert_eq!(mask.luminance(600, 100), 0);
        assert_eq!(mask.luminance(1000, 100), 0);
    }

    #[test]
    fn test_all_channels_equal() {
        let mask = generate_mask(&single_scene(), &MaskConfig::default()).unwrap();
        for &(x, y) in &[(0u32, 0u32), (341, 100), (342, 100), (512, 512), (1023, 1023)] {
            let [r, g, b, a] = mask.pixel(x, y);
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(b, a);
        }
    }

    #[test]
    fn test_rows_switch_segment_at_time_boundary() {
        let scenes = vec![
            Scene::new(10, ThreadId::One, ThreadId::Two),
            Scene::new(20, ThreadId::Two, ThreadId::Three),
        ];
        let mask = generate_mask(&scenes, &MaskConfig::default()).unwrap();

        // first third of the timeline lights facet 0, the rest facet 1;
        // with the off-by-one row phase the flip lands between rows 340/341
        assert_eq!(mask.luminance(0, 340), 255);
        assert_eq!(mask.luminance(342, 340), 0);

        assert_eq!(mask.luminance(0, 341), 0);
        assert_eq!(mask.luminance(342, 341), 255);

        // the last row still resolves to the final segment
        assert_eq!(mask.luminance(342, 1023), 255);
    }

    #[test]
    fn test_raster_dimensions() {
        let mask = generate_mask(&single_scene(), &MaskConfig::default()).unwrap();
        assert_eq!(mask.size, 1024);
        assert_eq!(mask.pixels.len(), 1024 * 1024 * 4);
    }

    #[test]
    fn test_empty_scenes_rejected() {
        let result = generate_mask(&[], &MaskConfig::default());
        assert!(matches!(result, Err(Error::EmptyScreening)));
    }
}
