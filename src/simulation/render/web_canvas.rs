use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::GameError;

use super::canvas::Canvas2d;

/// `<canvas>` element plus its 2D context.
#[derive(Clone)]
pub struct WebCanvas {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl WebCanvas {
    /// Look up `#id` in the current document.
    pub fn by_id(id: &str) -> Result<Self, GameError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GameError::Dom("no document".to_string()))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::Dom(format!("no element #{}", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GameError::Dom(format!("#{} is not a canvas", id)))?;
        Self::from_element(element)
    }

    pub fn from_element(element: HtmlCanvasElement) -> Result<Self, GameError> {
        let context = element
            .get_context("2d")
            .map_err(|_| GameError::Dom("getContext(\"2d\") threw".to_string()))?
            .ok_or_else(|| GameError::Dom("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Dom("context is not a CanvasRenderingContext2D".to_string()))?;
        Ok(Self { element, context })
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }
}

impl Canvas2d for WebCanvas {
    fn width(&self) -> f64 {
        self.element.width() as f64
    }

    fn height(&self) -> f64 {
        self.element.height() as f64
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        // Only throws for non-finite arguments, which the context ignores anyway.
        let _ = self.context.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.context.rotate(angle);
    }

    fn set_fill_style(&mut self, colour: &str) {
        self.context.set_fill_style_str(colour);
    }

    fn set_stroke_style(&mut self, colour: &str) {
        self.context.set_stroke_style_str(colour);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.context.fill_rect(x, y, w, h);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }
}
