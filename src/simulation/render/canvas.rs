use std::cell::RefCell;
use std::rc::Rc;

/// The slice of a 2D drawing context the renderer uses.
///
/// Mirrors `CanvasRenderingContext2D`; positive rotation is clockwise on screen.
pub trait Canvas2d {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    fn set_fill_style(&mut self, colour: &str);
    fn set_stroke_style(&mut self, colour: &str);
    fn set_line_width(&mut self, width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// One call made against a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    FillRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Fill,
    Stroke,
}

/// Headless canvas that records every call.
///
/// Clones share the same log, so a test can keep a handle while the world
/// owns the canvas.
#[derive(Clone)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    log: Rc<RefCell<Vec<DrawCommand>>>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn commands(&self) -> Vec<DrawCommand> {
        self.log.borrow().clone()
    }

    /// Returns and clears the log.
    pub fn take_commands(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.log.borrow_mut().push(cmd);
    }
}

impl Canvas2d for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::Translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.push(DrawCommand::Rotate(angle));
    }

    fn set_fill_style(&mut self, colour: &str) {
        self.push(DrawCommand::FillStyle(colour.to_string()));
    }

    fn set_stroke_style(&mut self, colour: &str) {
        self.push(DrawCommand::StrokeStyle(colour.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(DrawCommand::FillRect(x, y, w, h));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo(x, y));
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }
}
