//! Prism geometry synthesis
//!
//! Builds the triangular-prism body of a screening: total height encodes
//! screen time, three facets wrap the circumference, and per-vertex colors
//! cycle the thread palette.

use crate::cylinder::open_cylinder;
use toblerone_core::{
    palette_color, total_length, ColorVertex, Error, Point3f, Result, Rgb, Scene, ThreadId,
};

/// Parameters for prism generation
#[derive(Debug, Clone)]
pub struct PrismConfig {
    /// Cross-section radius
    pub radius: f32,
    /// Radial facets around the circumference; 3 gives the toblerone shape
    pub radial_segments: u32,
    /// Vertex rings along the axis, in addition to the top ring
    pub height_segments: u32,
    /// Vertical units per decisecond of screen time
    pub units_per_decisecond: f32,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            radial_segments: 3,
            height_segments: 1,
            units_per_decisecond: 0.1,
        }
    }
}

/// Prism body geometry with per-vertex colors
#[derive(Debug, Clone)]
pub struct PrismGeometry {
    pub positions: Vec<Point3f>,
    pub colors: Vec<Rgb>,
    pub faces: Vec<[u32; 3]>,
    pub height: f32,
}

impl PrismGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Top-ring vertex position for a thread's side edge. The transition
    /// line walks these positions downwards along the axis.
    pub fn ring_position(&self, thread: ThreadId) -> Point3f {
        self.positions[thread.index()]
    }

    /// Interleave positions and colors for GPU upload
    pub fn interleaved(&self) -> Vec<ColorVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(position, color)| ColorVertex::new(*position, color.to_array()))
            .collect()
    }
}

/// Generate the prism body for an ordered scene list.
///
/// Vertex colors cycle the palette by `vertex_index % 4` against the 3-facet
/// ring, giving the asymmetric banding the visualization ships with; the
/// cycle is deliberately not aligned to the facet count.
pub fn generate_prism(scenes: &[Scene], config: &PrismConfig) -> Result<PrismGeometry> {
    if scenes.is_empty() {
        return Err(Error::EmptyScreening);
    }

    let height = total_length(scenes) as f32 * config.units_per_decisecond;
    let (positions, faces) = open_cylinder(
        config.radius,
        height,
        config.radial_segments,
        config.height_segments,
    );

    let colors = (0..positions.len()).map(|i| palette_color(i % 4)).collect();

    Ok(PrismGeometry {
        positions,
        colors,
        faces,
        height,
    })
}
