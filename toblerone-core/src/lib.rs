//! Core data structures for toblerone
//!
//! This crate provides the domain model shared by the ingestion pipeline and
//! the mesh synthesizers: narrative threads, scene segments, screening
//! records, colors, vertex buffers and oriented-segment transforms.

pub mod color;
pub mod error;
pub mod screening;
pub mod transform;
pub mod vertex;

pub use color::*;
pub use error::*;
pub use screening::*;
pub use transform::*;
pub use vertex::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};
