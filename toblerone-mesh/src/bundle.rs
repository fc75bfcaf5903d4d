//! Screening-to-bundle assembly

use crate::line::{build_transition_line, LineSegment};
use crate::mask::{generate_mask, AlphaMask, MaskConfig};
use crate::prism::{generate_prism, PrismConfig, PrismGeometry};
use toblerone_core::{Result, Screening};

/// Combined synthesis parameters
#[derive(Debug, Clone, Default)]
pub struct TobleroneConfig {
    pub prism: PrismConfig,
    pub mask: MaskConfig,
}

/// Base surface material parameters the presentation layer applies together
/// with the alpha mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    /// Fragments below this mask value are discarded
    pub alpha_test: f32,
    pub opacity: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            alpha_test: 0.2,
            opacity: 0.8,
        }
    }
}

/// Everything a renderer needs to draw one screening: the prism body, its
/// alpha mask, and the transition-line segments. The bundle owns all of its
/// buffers outright; it is recomputed from the record on demand and never
/// cached.
#[derive(Debug, Clone)]
pub struct MeshBundle {
    pub prism: PrismGeometry,
    pub mask: AlphaMask,
    pub line: Vec<LineSegment>,
    pub material: MaterialParams,
}

/// Synthesize the full mesh bundle for a screening record. Pure function of
/// the record and config; runs to completion before returning.
pub fn synthesize(screening: &Screening, config: &TobleroneConfig) -> Result<MeshBundle> {
    let prism = generate_prism(&screening.scenes, &config.prism)?;
    let mask = generate_mask(&screening.scenes, &config.mask)?;
    let line = build_transition_line(
        &screening.scenes,
        &prism,
        config.prism.units_per_decisecond,
    )?;

    Ok(MeshBundle {
        prism,
        mask,
        line,
        material: MaterialParams::default(),
    })
}
