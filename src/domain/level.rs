use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One rectangle in a level, centre-positioned, in canvas pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub restitution: f64,
    #[serde(default)]
    pub friction: f64,
}

impl BodySpec {
    /// Dynamic, frictionless, no bounce.
    pub fn dynamic(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            is_static: false,
            restitution: 0.0,
            friction: 0.0,
        }
    }

    pub fn fixed(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            is_static: true,
            ..Self::dynamic(x, y, width, height)
        }
    }

    fn validate(&self) -> Result<(), String> {
        let all_finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err("body has a non-finite coordinate".to_string());
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(format!(
                "body at ({}, {}) has non-positive size {}x{}",
                self.x, self.y, self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Body layout for one level. Walls are generated per world, not stored here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    #[serde(default)]
    pub name: String,
    pub bodies: Vec<BodySpec>,
}

/// Ordered level list, loadable from a JSON bundle.
pub struct LevelBundle;

impl LevelBundle {
    /// Parse `{"levels": [{"name": ..., "bodies": [...]}, ...]}`.
    pub fn from_bundle_json(json: &str) -> Result<Vec<Level>, GameError> {
        let bundle: BundleRoot =
            serde_json::from_str(json).map_err(|e| GameError::InvalidLevels(e.to_string()))?;
        Self::from_bundle(bundle)
    }

    /// Levels shipped with the game. Coordinates are relative to the level
    /// square's top-left corner and fit the 600px canvas the page ships with.
    pub fn builtin() -> Vec<Level> {
        vec![
            Level {
                name: "First drop".to_string(),
                bodies: vec![BodySpec::dynamic(100.0, 100.0, 50.0, 50.0)],
            },
            Level {
                name: "Shelf".to_string(),
                bodies: vec![
                    BodySpec::fixed(190.0, 250.0, 160.0, 10.0),
                    BodySpec::dynamic(190.0, 190.0, 40.0, 40.0),
                ],
            },
            Level {
                name: "Pair".to_string(),
                bodies: vec![
                    BodySpec::dynamic(120.0, 120.0, 40.0, 40.0),
                    BodySpec::dynamic(260.0, 260.0, 30.0, 30.0),
                ],
            },
        ]
    }

    /// Level names for the UI, as JSON.
    pub fn manifest_json(levels: &[Level]) -> String {
        let out = LevelManifest {
            format_version: 1,
            levels: levels
                .iter()
                .enumerate()
                .map(|(index, level)| LevelManifestEntry {
                    index,
                    name: &level.name,
                    body_count: level.bodies.len(),
                })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Vec<Level>, GameError> {
        if bundle.levels.is_empty() {
            return Err(GameError::NoLevels);
        }

        let mut levels = Vec::with_capacity(bundle.levels.len());
        for (index, mut level) in bundle.levels.into_iter().enumerate() {
            for body in level.bodies.iter() {
                body.validate()
                    .map_err(|e| GameError::InvalidLevels(format!("level {}: {}", index, e)))?;
            }
            if level.name.is_empty() {
                level.name = format!("Level {}", index + 1);
            }
            levels.push(level);
        }
        Ok(levels)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    levels: Vec<Level>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelManifest<'a> {
    format_version: u32,
    levels: Vec<LevelManifestEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelManifestEntry<'a> {
    index: usize,
    name: &'a str,
    body_count: usize,
}
