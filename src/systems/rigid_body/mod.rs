//! RigidBody - A solid rectangle that moves as a unit
//!
//! Bodies never rotate (infinite moment of inertia), so the shape is fully
//! described by a centre and half extents. Vertices are produced in world
//! coordinates for the renderer.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::RigidBody;
