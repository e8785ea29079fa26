use serde::{Deserialize, Serialize};

/// Colours and line widths used by the renderer.
///
/// Colours are CSS colour strings, handed straight to the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub background_colour: String,
    pub shape_line_width: f64,
    pub shape_stroke_colour: String,
    pub shape_fill_colour: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_colour: "white".to_string(),
            shape_line_width: 1.0,
            shape_stroke_colour: "black".to_string(),
            shape_fill_colour: "black".to_string(),
        }
    }
}
