use std::f64::consts::SQRT_2;

use crate::domain::{BodySpec, GameConfig};
use crate::rigid_body::Vec2;

/// The square the level lives in, centred on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelFrame {
    pub centre: Vec2,
    pub size: f64,
}

impl LevelFrame {
    /// The level rotates around the canvas centre and is widest at 45°,
    /// where it spans `size * √2`; `level_margin` keeps some air around it.
    pub fn for_canvas(width: f64, height: f64, config: &GameConfig) -> Self {
        let size = width.max(height) * config.level_margin / SQRT_2;
        let centre = Vec2::new(width / 2.0, height / 2.0);
        Self { centre, size }
    }

    /// Top-left corner; level body coordinates are relative to this.
    pub fn origin(&self) -> Vec2 {
        self.centre - Vec2::new(self.size / 2.0, self.size / 2.0)
    }

    /// Level-space body moved into canvas space.
    pub fn place(&self, spec: &BodySpec) -> BodySpec {
        let origin = self.origin();
        BodySpec {
            x: spec.x + origin.x,
            y: spec.y + origin.y,
            ..spec.clone()
        }
    }

    /// Top, bottom, left, right boundary bars (canvas space, static).
    pub fn walls(&self, thickness: f64) -> [BodySpec; 4] {
        let Vec2 { x: cx, y: cy } = self.centre;
        let half = self.size / 2.0;
        [
            BodySpec::fixed(cx, cy - half, self.size, thickness),
            BodySpec::fixed(cx, cy + half, self.size, thickness),
            BodySpec::fixed(cx - half, cy, thickness, self.size),
            BodySpec::fixed(cx + half, cy, thickness, self.size),
        ]
    }
}
