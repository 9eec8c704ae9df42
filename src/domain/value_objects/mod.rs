//! Value objects - Immutable objects defined by their attributes

mod ids;
mod vector;

pub use ids::*;
pub use vector::Vec3;
