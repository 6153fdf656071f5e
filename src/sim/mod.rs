//! Deterministic shape-field simulation
//!
//! All per-frame logic lives here. This module must stay deterministic:
//! - One step per frame, no wall-clock time
//! - Randomness only through an injected `PositionSource`
//! - Stable iteration order (field order, fixed for the run)
//! - No rendering or encoding dependencies

pub mod geometry;
pub mod kinematics;
pub mod placement;
pub mod state;
pub mod tick;

pub use geometry::{minimal_bounding_box, polygon_area2, rectangle_box, rectangle_vertices};
pub use kinematics::{advance, wrap};
pub use placement::{PlacementRules, PositionSource, sample_valid_position};
pub use state::{Field, Primitive, Shape, ShapeKind};
