use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rigid_body_system::{DEFAULT_GRAVITY_STRENGTH, DEFAULT_MAX_SPEED};

use super::render_config::RenderConfig;

/// Tunables for one game session. Every field has a default, so a config
/// JSON only needs the keys it wants to override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub render: RenderConfig,
    /// Length of one quarter-turn animation
    pub rotation_duration_ms: f64,
    /// Minimum time between animation samples
    pub rotation_tick_ms: f64,
    /// Fixed physics step
    pub physics_step_ms: f64,
    /// Cap on catch-up steps after a long frame
    pub max_steps_per_frame: u32,
    pub gravity_strength: f64,
    pub max_speed: f64,
    /// Thickness of the generated level walls
    pub wall_thickness: f64,
    /// Share of the canvas the rotating level may occupy at 45°
    pub level_margin: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            rotation_duration_ms: 1000.0,
            rotation_tick_ms: 30.0,
            physics_step_ms: 1000.0 / 60.0,
            max_steps_per_frame: 5,
            gravity_strength: DEFAULT_GRAVITY_STRENGTH,
            max_speed: DEFAULT_MAX_SPEED,
            wall_thickness: 2.0,
            level_margin: 0.9,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("rotationDurationMs", self.rotation_duration_ms),
            ("rotationTickMs", self.rotation_tick_ms),
            ("physicsStepMs", self.physics_step_ms),
            ("wallThickness", self.wall_thickness),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        let non_negative = [
            ("gravityStrength", self.gravity_strength),
            ("maxSpeed", self.max_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        if !(self.level_margin > 0.0 && self.level_margin <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "levelMargin must be in (0, 1], got {}",
                self.level_margin
            )));
        }
        if self.max_steps_per_frame == 0 {
            return Err(GameError::InvalidConfig(
                "maxStepsPerFrame must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
