use crate::core::clock::FrameTimer;
use crate::domain::{GameConfig, Level, LevelBundle};
use crate::error::GameError;

use super::animation::RotationTicket;
use super::canvas::Canvas2d;
use super::World;

/// Level list plus the one live world.
///
/// Owns the canvas between worlds: each world borrows it for its lifetime
/// and hands it back on dispose.
pub struct GameManager<C: Canvas2d> {
    config: GameConfig,
    levels: Vec<Level>,
    current_level: usize,
    world: Option<World<C>>,
    /// Parked canvas while no world is loaded
    canvas: Option<C>,
    /// UI toggle state for the gravity button; reset on every level load
    gravity_toggle: bool,
}

impl<C: Canvas2d> GameManager<C> {
    pub fn new(canvas: C, levels: Vec<Level>, config: GameConfig) -> Result<Self, GameError> {
        if levels.is_empty() {
            return Err(GameError::NoLevels);
        }
        config.validate()?;

        Ok(Self {
            config,
            levels,
            current_level: 0,
            world: None,
            canvas: Some(canvas),
            gravity_toggle: true,
        })
    }

    /// Built-in levels, default config.
    pub fn with_builtin_levels(canvas: C) -> Self {
        Self {
            config: GameConfig::default(),
            levels: LevelBundle::builtin(),
            current_level: 0,
            world: None,
            canvas: Some(canvas),
            gravity_toggle: true,
        }
    }

    /// Dispose the current world and start `index` in its place.
    pub fn load_level(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.levels.len() {
            return Err(GameError::LevelOutOfRange {
                index,
                count: self.levels.len(),
            });
        }

        let timer = FrameTimer::start();
        let canvas = match self.world.take() {
            Some(world) => world.dispose(),
            None => self.canvas.take().ok_or(GameError::NoActiveWorld)?,
        };

        self.current_level = index;
        self.reset_button_status();

        let level = &self.levels[index];
        let mut world = World::new(canvas, level, &self.config);
        world.start();
        self.world = Some(world);

        console_log!(
            "loaded level {} ({}) in {:.1}ms",
            index,
            level.name,
            timer.elapsed_ms()
        );
        Ok(())
    }

    /// Restart the current level.
    pub fn reload(&mut self) -> Result<(), GameError> {
        self.load_level(self.current_level)
    }

    /// Advance to the next level. Returns false (and stays put) on the last one.
    pub fn next_level(&mut self) -> Result<bool, GameError> {
        if self.is_last_level() {
            return Ok(false);
        }
        self.load_level(self.current_level + 1)?;
        Ok(true)
    }

    pub fn is_last_level(&self) -> bool {
        self.current_level + 1 >= self.levels.len()
    }

    pub fn rotate(&mut self, clockwise: bool, now_ms: f64) -> Result<RotationTicket, GameError> {
        self.world
            .as_mut()
            .ok_or(GameError::NoActiveWorld)?
            .rotate(clockwise, now_ms)
    }

    /// One display frame: animation, physics, draw.
    pub fn frame(&mut self, now_ms: f64) {
        if let Some(world) = self.world.as_mut() {
            if !world.is_running() {
                return;
            }
            world.tick(now_ms);
            world.render();
        }
    }

    /// Flip the gravity toggle. Returns the new state.
    pub fn toggle_gravity(&mut self) -> bool {
        self.gravity_toggle = !self.gravity_toggle;
        if let Some(world) = self.world.as_mut() {
            world.set_gravity_enabled(self.gravity_toggle);
        }
        self.gravity_toggle
    }

    pub fn gravity_toggle_enabled(&self) -> bool {
        self.gravity_toggle
    }

    /// Tear down the current world; the canvas is kept for the next load.
    pub fn unload(&mut self) {
        if let Some(world) = self.world.take() {
            self.canvas = Some(world.dispose());
            console_log!("unloaded level {}", self.current_level);
        }
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> Option<&World<C>> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World<C>> {
        self.world.as_mut()
    }

    fn reset_button_status(&mut self) {
        self.gravity_toggle = true;
    }
}
