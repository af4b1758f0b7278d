pub mod canvas;
pub mod runner;

pub use canvas::Canvas2d;
pub use runner::ShowRunner;

use std::cell::RefCell;

use pyro_engine::{InputEvent, ShowConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ShowRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ShowRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Start the show on the canvas with the given element id, default tuning.
#[wasm_bindgen]
pub fn show_start(canvas_id: &str) -> Result<(), JsValue> {
    show_start_with_config(canvas_id, "{}")
}

/// Start the show with tuning overrides as a JSON object (the fields of
/// `ShowConfig`; missing fields fall back to defaults). The viewport size
/// always comes from the canvas element itself.
#[wasm_bindgen]
pub fn show_start_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Starting twice must not leak a second frame loop
    show_stop();

    let config: ShowConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("bad show config: {e}")))?;
    let runner = ShowRunner::start(canvas_id, config)?;
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
    log::info!("pyro: show started on #{}", canvas_id);
    Ok(())
}

/// Stop the show: cancel the frame callback and remove all listeners.
/// Safe to call repeatedly, or before any show has started.
#[wasm_bindgen]
pub fn show_stop() {
    RUNNER.with(|cell| {
        if let Some(mut runner) = cell.borrow_mut().take() {
            runner.stop();
            log::info!("pyro: show stopped");
        }
    });
}

/// Launch one firework from (origin_x, origin_y) to (target_x, target_y),
/// for scripted moments like the gold-winner reveal.
#[wasm_bindgen]
pub fn show_launch(origin_x: f32, origin_y: f32, target_x: f32, target_y: f32, kind: u8) {
    let _ = with_runner(|r| r.launch(origin_x, origin_y, target_x, target_y, kind));
}

// ---- Pointer forwarding, for hosts that deliver synthetic events instead
// of relying on the runner's own canvas listeners ----

#[wasm_bindgen]
pub fn show_pointer_down(x: f32, y: f32) {
    let _ = with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn show_pointer_up(x: f32, y: f32) {
    let _ = with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn show_pointer_move(x: f32, y: f32) {
    let _ = with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}
