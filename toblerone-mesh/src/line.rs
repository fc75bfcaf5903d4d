//! Thread-transition line synthesis
//!
//! Traces the primary-thread sequence down the prism as a chain of short
//! oriented cylinder segments. Runs of a constant primary thread produce a
//! single flat-colored segment; every thread change inserts a horizontal
//! corner plus a color-blended crossing towards the new thread's edge.

use crate::cylinder::open_cylinder;
use crate::prism::PrismGeometry;
use toblerone_core::{
    thread_color, ColorVertex, Error, Point3f, Result, Rgb, Scene, ThreadId, Transform3D,
};

/// Line segment cross-section radius
pub const LINE_RADIUS: f32 = 0.5;
/// Radial facets of each line segment cylinder
pub const LINE_SIDES: u32 = 4;

/// Coloring of one line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentColor {
    /// Single solid color
    Flat(Rgb),
    /// Solid color at each end, interpolated along the segment by
    /// per-vertex coloring
    Blend { start: Rgb, end: Rgb },
}

/// One oriented cylinder segment of the transition line
#[derive(Debug, Clone)]
pub struct LineSegment {
    pub start: Point3f,
    pub end: Point3f,
    /// Places a Y-aligned unit cylinder of this segment's length onto the
    /// path, midpoint at the segment center
    pub transform: Transform3D,
    pub length: f32,
    pub color: SegmentColor,
}

impl LineSegment {
    fn new(start: Point3f, end: Point3f, color: SegmentColor) -> Self {
        Self {
            start,
            end,
            transform: Transform3D::oriented_segment(start, end),
            length: (end - start).norm(),
            color,
        }
    }

    fn flat(start: Point3f, end: Point3f, color: Rgb) -> Self {
        Self::new(start, end, SegmentColor::Flat(color))
    }

    fn blend(start: Point3f, end: Point3f, from: Rgb, to: Rgb) -> Self {
        Self::new(
            start,
            end,
            SegmentColor::Blend {
                start: from,
                end: to,
            },
        )
    }

    /// Local-space cylinder geometry for this segment. The first vertex ring
    /// sits at the end of the path and takes the end color, the second ring
    /// takes the start color; the renderer applies `transform` on top.
    pub fn geometry(&self) -> (Vec<ColorVertex>, Vec<[u32; 3]>) {
        let (positions, faces) = open_cylinder(LINE_RADIUS, self.length, LINE_SIDES, 1);
        let (start_color, end_color) = match self.color {
            SegmentColor::Flat(color) => (color, color),
            SegmentColor::Blend { start, end } => (start, end),
        };

        let half = positions.len() / 2;
        let vertices = positions
            .iter()
            .enumerate()
            .map(|(i, position)| {
                let color = if i < half { end_color } else { start_color };
                ColorVertex::new(*position, color.to_array())
            })
            .collect();

        (vertices, faces)
    }
}

/// Build the transition line for an ordered scene list over a generated
/// prism. `units_per_decisecond` must match the scale the prism was built
/// with so the path hugs the surface.
pub fn build_transition_line(
    scenes: &[Scene],
    prism: &PrismGeometry,
    units_per_decisecond: f32,
) -> Result<Vec<LineSegment>> {
    if scenes.is_empty() {
        return Err(Error::EmptyScreening);
    }

    let mut segments = Vec::new();
    let mut previous: Option<ThreadId> = None;
    let mut start_position = Point3f::origin();
    let mut y_offset = 0.0f32;

    for scene in scenes {
        let current = scene.primary;
        match previous {
            Some(prev) if prev != current => {
                let corner = edge_position(prism, prev, y_offset);
                let landing = edge_position(prism, current, y_offset);

                segments.push(LineSegment::flat(
                    start_position,
                    corner,
                    thread_color(prev),
                ));
                segments.push(LineSegment::blend(
                    corner,
                    landing,
                    thread_color(prev),
                    thread_color(current),
                ));

                start_position = landing;
            }
            Some(_) => {}
            None => {
                start_position = edge_position(prism, current, y_offset);
            }
        }

        y_offset += scene.length as f32 * units_per_decisecond;
        previous = Some(current);
    }

    let last = previous.expect("scenes is non-empty");
    let bottom = edge_position(prism, last, y_offset);
    segments.push(LineSegment::flat(start_position, bottom, thread_color(last)));

    Ok(segments)
}

/// A thread's side-edge position at a running vertical offset below the top
fn edge_position(prism: &PrismGeometry, thread: ThreadId, y_offset: f32) -> Point3f {
    let ring = prism.ring_position(thread);
    Point3f::new(ring.x, ring.y - y_offset, ring.z)
}
