//! Core helpers shared by every layer
//!
//! - logging    - console/tracing macros (must be first for macro export!)
//! - clock      - millisecond clock for the frame loop
//! - direction  - the four gravity directions
//! - interpolation - easing used by the rotation animation

#[macro_use]
#[path = "utils/logging.rs"]
pub mod logging;
pub mod clock;
pub mod direction;
pub mod interpolation;

pub use direction::Direction;
pub use interpolation::Interpolation;
