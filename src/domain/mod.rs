//! Domain data: levels and configuration (JSON-loadable)

pub mod config;
pub mod level;
pub mod render_config;

pub use config::GameConfig;
pub use level::{BodySpec, Level, LevelBundle};
pub use render_config::RenderConfig;
