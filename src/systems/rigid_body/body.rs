use crate::domain::level::BodySpec;

use super::vec2::Vec2;

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (centre)
    pub pos: Vec2,
    /// Velocity vector (pixels per step)
    pub velocity: Vec2,
    /// Static bodies never move and are never integrated
    pub is_static: bool,
    /// Is body active (simulated)?
    pub active: bool,
    /// Unique ID for this body
    pub id: u32,

    // === Shape ===
    pub half_width: f64,
    pub half_height: f64,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f64,
    /// Velocity kept along a surface while resting on it (0.0 = frictionless)
    pub friction: f64,
}

impl RigidBody {
    /// Create a rectangular body centred at (x, y)
    pub fn new_rect(x: f64, y: f64, w: f64, h: f64, id: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            is_static: false,
            active: true,
            id,
            half_width: (w / 2.0).abs(),
            half_height: (h / 2.0).abs(),
            restitution: 0.0,
            friction: 0.0,
        }
    }

    /// Create a static rectangle (walls, platforms)
    pub fn new_static_rect(x: f64, y: f64, w: f64, h: f64, id: u32) -> Self {
        let mut body = Self::new_rect(x, y, w, h, id);
        body.is_static = true;
        body
    }

    pub fn from_spec(spec: &BodySpec, id: u32) -> Self {
        let mut body = Self::new_rect(spec.x, spec.y, spec.width, spec.height, id);
        body.is_static = spec.is_static;
        body.set_restitution(spec.restitution);
        body.set_friction(spec.friction);
        body
    }

    /// Corners in world coordinates, clockwise on screen from top-left
    pub fn vertices(&self) -> [Vec2; 4] {
        let Vec2 { x, y } = self.pos;
        let (hw, hh) = (self.half_width, self.half_height);
        [
            Vec2::new(x - hw, y - hh),
            Vec2::new(x + hw, y - hh),
            Vec2::new(x + hw, y + hh),
            Vec2::new(x - hw, y + hh),
        ]
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f64) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn set_friction(&mut self, f: f64) {
        self.friction = f.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_vertices_wind_around_centre() {
        let body = RigidBody::new_rect(100.0, 100.0, 50.0, 20.0, 1);
        let v = body.vertices();
        assert_eq!(v[0], Vec2::new(75.0, 90.0));
        assert_eq!(v[1], Vec2::new(125.0, 90.0));
        assert_eq!(v[2], Vec2::new(125.0, 110.0));
        assert_eq!(v[3], Vec2::new(75.0, 110.0));
    }

    #[test]
    fn from_spec_carries_material_and_kind() {
        let spec = BodySpec {
            restitution: 0.4,
            friction: 2.0,
            ..BodySpec::fixed(10.0, 20.0, 30.0, 40.0)
        };
        let body = RigidBody::from_spec(&spec, 7);

        assert!(body.is_static);
        assert_eq!(body.id, 7);
        assert_eq!(body.pos, Vec2::new(10.0, 20.0));
        assert_eq!((body.half_width, body.half_height), (15.0, 20.0));
        assert_eq!(body.restitution, 0.4);
        assert_eq!(body.friction, 1.0);
        assert_eq!(body.velocity, Vec2::zero());
    }

    #[test]
    fn material_properties_are_clamped() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 1.0, 1.0, 1);
        body.set_restitution(3.0);
        body.set_friction(-1.0);
        assert_eq!(body.restitution, 1.0);
        assert_eq!(body.friction, 0.0);
    }
}
