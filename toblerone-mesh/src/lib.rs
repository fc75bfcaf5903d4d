//! Mesh, texture and line synthesis for toblerone screenings
//!
//! This crate turns a [`Screening`](toblerone_core::Screening) record into
//! renderable data: a triangular-prism ("toblerone") geometry whose height
//! encodes screening duration, a greyscale alpha mask encoding the dominant
//! thread transition per scanline, and an oriented chain of cylinder segments
//! tracing the primary-thread path. Synthesis is a pure function of the
//! record; nothing here caches or mutates shared state.

pub mod bundle;
pub mod cylinder;
pub mod line;
pub mod mask;
pub mod prism;

pub use bundle::*;
pub use cylinder::*;
pub use line::*;
pub use mask::*;
pub use prism::*;
