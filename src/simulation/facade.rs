use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::clock::now_ms;
use crate::domain::{GameConfig, LevelBundle};
use crate::error::GameError;

use super::manager::GameManager;
use super::web_canvas::WebCanvas;

const TOGGLE_GRAVITY_ID: &str = "toggle-gravity";

/// Buttons the page may provide, by element id.
#[derive(Clone, Copy, Debug)]
enum Control {
    Retry,
    NextLevel,
    RotateLeft,
    RotateRight,
    ToggleGravity,
}

impl Control {
    const ALL: [Control; 5] = [
        Control::Retry,
        Control::NextLevel,
        Control::RotateLeft,
        Control::RotateRight,
        Control::ToggleGravity,
    ];

    fn element_id(self) -> &'static str {
        match self {
            Control::Retry => "retry",
            Control::NextLevel => "next-level",
            Control::RotateLeft => "rotate-left",
            Control::RotateRight => "rotate-right",
            Control::ToggleGravity => TOGGLE_GRAVITY_ID,
        }
    }
}

type SharedManager = Rc<RefCell<GameManager<WebCanvas>>>;

/// A click handler attached to one control button.
struct Listener {
    element: web_sys::Element,
    on_click: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

/// Browser entry point: owns the game state, the frame loop and the buttons.
#[wasm_bindgen]
pub struct Game {
    manager: SharedManager,
    /// Bumped by every start and stop; a frame loop ends once it no longer
    /// matches the session it was started in
    session: Rc<Cell<u64>>,
    listeners: Vec<Listener>,
    started: bool,
}

#[wasm_bindgen]
impl Game {
    /// `config_json` / `levels_json` are optional JSON overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        config_json: Option<String>,
        levels_json: Option<String>,
    ) -> Result<Game, JsValue> {
        let canvas = WebCanvas::by_id(canvas_id).map_err(to_js)?;
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json).map_err(to_js)?,
            None => GameConfig::default(),
        };
        let levels = match levels_json {
            Some(json) => LevelBundle::from_bundle_json(&json).map_err(to_js)?,
            None => LevelBundle::builtin(),
        };
        let manager = GameManager::new(canvas, levels, config).map_err(to_js)?;

        Ok(Game {
            manager: Rc::new(RefCell::new(manager)),
            session: Rc::new(Cell::new(0)),
            listeners: Vec::new(),
            started: false,
        })
    }

    /// Load the first level, wire up the buttons and start the frame loop.
    ///
    /// Calling it again while started does nothing; after `stop()` it starts
    /// over from the first level.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.started {
            return Ok(());
        }
        self.manager.borrow_mut().load_level(0).map_err(to_js)?;
        sync_gravity_button(self.manager.borrow().gravity_toggle_enabled());

        let session = self.next_session();
        self.listeners = attach_controls(&self.manager);
        if let Err(err) = start_frame_loop(self.manager.clone(), self.session.clone(), session) {
            self.stop();
            return Err(to_js(err));
        }

        self.started = true;
        Ok(())
    }

    /// End the frame loop, detach the buttons and unload the level.
    pub fn stop(&mut self) {
        self.next_session();
        self.detach_controls();
        self.manager.borrow_mut().unload();
        self.started = false;
    }

    #[wasm_bindgen(getter)]
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn rotate(&self, clockwise: bool) -> Result<(), JsValue> {
        self.manager
            .borrow_mut()
            .rotate(clockwise, now_ms())
            .map(|_| ())
            .map_err(to_js)
    }

    pub fn load_level(&self, index: usize) -> Result<(), JsValue> {
        let mut manager = self.manager.borrow_mut();
        manager.load_level(index).map_err(to_js)?;
        sync_gravity_button(manager.gravity_toggle_enabled());
        Ok(())
    }

    /// Returns false when already on the last level.
    pub fn next_level(&self) -> Result<bool, JsValue> {
        let mut manager = self.manager.borrow_mut();
        let advanced = manager.next_level().map_err(to_js)?;
        sync_gravity_button(manager.gravity_toggle_enabled());
        Ok(advanced)
    }

    pub fn reload(&self) -> Result<(), JsValue> {
        let mut manager = self.manager.borrow_mut();
        manager.reload().map_err(to_js)?;
        sync_gravity_button(manager.gravity_toggle_enabled());
        Ok(())
    }

    pub fn toggle_gravity(&self) -> bool {
        let enabled = self.manager.borrow_mut().toggle_gravity();
        sync_gravity_button(enabled);
        enabled
    }

    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> String {
        self.manager
            .borrow()
            .world()
            .map(|w| w.direction().name().to_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn canvas_rotation(&self) -> f64 {
        self.manager
            .borrow()
            .world()
            .map(|w| w.canvas_rotation())
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(getter)]
    pub fn is_rotating(&self) -> bool {
        self.manager
            .borrow()
            .world()
            .map(|w| w.is_rotating())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn current_level(&self) -> usize {
        self.manager.borrow().current_level()
    }

    #[wasm_bindgen(getter)]
    pub fn level_count(&self) -> usize {
        self.manager.borrow().level_count()
    }

    pub fn levels_manifest_json(&self) -> String {
        LevelBundle::manifest_json(self.manager.borrow().levels())
    }
}

impl Game {
    fn next_session(&self) -> u64 {
        let session = self.session.get().wrapping_add(1);
        self.session.set(session);
        session
    }

    fn detach_controls(&mut self) {
        for listener in self.listeners.drain(..) {
            let removed = listener.element.remove_event_listener_with_callback(
                "click",
                listener.on_click.as_ref().unchecked_ref(),
            );
            if removed.is_err() {
                console_warn!("could not detach #{} handler", listener.element.id());
            }
        }
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        // Ends the frame loop and drops the closures only after they are detached.
        self.next_session();
        self.detach_controls();
    }
}

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, GameError> {
    web_sys::window()
        .ok_or_else(|| GameError::Dom("no window".to_string()))?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(|_| GameError::Dom("requestAnimationFrame failed".to_string()))
}

/// Render once per display refresh until the game moves on from `session`.
fn start_frame_loop(
    manager: SharedManager,
    current: Rc<Cell<u64>>,
    session: u64,
) -> Result<(), GameError> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = callback.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if current.get() != session {
            // Drop our own closure; the loop ends here.
            let _ = callback.borrow_mut().take();
            return;
        }

        manager.borrow_mut().frame(now_ms());

        if let Some(cb) = callback.borrow().as_ref() {
            if let Err(err) = request_animation_frame(cb) {
                console_warn!("frame loop stopped: {}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    let first_frame = match handle.borrow().as_ref() {
        Some(cb) => request_animation_frame(cb).map(|_| ()),
        None => Ok(()),
    };
    first_frame
}

/// Attach click handlers to whichever control buttons exist on the page.
fn attach_controls(manager: &SharedManager) -> Vec<Listener> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        console_warn!("no document; controls not attached");
        return Vec::new();
    };

    let mut listeners = Vec::with_capacity(Control::ALL.len());
    for control in Control::ALL {
        let Some(element) = document.get_element_by_id(control.element_id()) else {
            console_debug!("no #{} button", control.element_id());
            continue;
        };

        let manager = manager.clone();
        let on_click = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            handle_control(&manager, control);
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        if element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_err()
        {
            console_warn!("could not attach #{} handler", control.element_id());
            continue;
        }
        listeners.push(Listener { element, on_click });
    }
    listeners
}

fn handle_control(manager: &SharedManager, control: Control) {
    let mut manager = manager.borrow_mut();
    let result = match control {
        Control::Retry => manager.reload(),
        Control::NextLevel => manager.next_level().map(|_| ()),
        Control::RotateLeft => manager.rotate(false, now_ms()).map(|_| ()),
        Control::RotateRight => manager.rotate(true, now_ms()).map(|_| ()),
        Control::ToggleGravity => {
            manager.toggle_gravity();
            Ok(())
        }
    };

    if let Err(err) = result {
        console_warn!("{:?}: {}", control, err);
    }
    sync_gravity_button(manager.gravity_toggle_enabled());
}

/// Mirror the gravity toggle onto the button's `enabled` class.
fn sync_gravity_button(enabled: bool) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(TOGGLE_GRAVITY_ID))
    else {
        return;
    };
    if element
        .class_list()
        .toggle_with_force("enabled", enabled)
        .is_err()
    {
        console_warn!("could not update #{} class", TOGGLE_GRAVITY_ID);
    }
}
