use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use pyro_engine::{InputEvent, ShowConfig, ShowState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::canvas::Canvas2d;

type FrameClosure = Closure<dyn FnMut()>;

/// Wires a [`ShowState`] to a live canvas: owns the drawing surface, the
/// pointer listeners, and the self-re-arming `requestAnimationFrame` loop.
///
/// `stop` cancels the pending frame callback, removes every listener, and
/// shuts the simulation down. It is safe to call more than once, and runs
/// on Drop as well.
pub struct ShowRunner {
    state: Rc<RefCell<ShowState>>,
    surface: Rc<RefCell<Canvas2d>>,
    canvas: HtmlCanvasElement,
    raf_id: Rc<RefCell<Option<i32>>>,
    /// Kept alive for the lifetime of the loop; taking it out stops any
    /// queued frame from re-arming.
    raf_closure: Rc<RefCell<Option<FrameClosure>>>,
    listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
}

impl ShowRunner {
    /// Look up the canvas, build the simulation, attach listeners, and arm
    /// the frame loop. Declines to start (returns `Err`) when the canvas is
    /// missing, has no 2D context, or is zero-sized.
    pub fn start(canvas_id: &str, mut config: ShowConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no window/document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
            .dyn_into()?;

        // The canvas element is the source of truth for the viewport; a
        // seed of 0 means "different show every mount".
        config.width = canvas.width() as f32;
        config.height = canvas.height() as f32;
        if config.seed == 0 {
            config.seed = js_sys::Date::now() as u64;
        }

        let state = ShowState::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let surface = Canvas2d::from_canvas(&canvas)?;

        let mut runner = ShowRunner {
            state: Rc::new(RefCell::new(state)),
            surface: Rc::new(RefCell::new(surface)),
            canvas,
            raf_id: Rc::new(RefCell::new(None)),
            raf_closure: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        };
        runner.attach_listeners()?;
        runner.arm_frame_loop()?;
        Ok(runner)
    }

    /// Queue a pointer event, for hosts that forward synthetic events.
    pub fn push_input(&self, event: InputEvent) {
        self.state.borrow_mut().push_input(event);
    }

    /// Launch a single firework, for scripted reveal moments.
    pub fn launch(&self, origin_x: f32, origin_y: f32, target_x: f32, target_y: f32, kind: u8) {
        self.state.borrow_mut().launch(
            Vec2::new(origin_x, origin_y),
            Vec2::new(target_x, target_y),
            kind,
        );
    }

    /// Tear down the loop and the listeners. Idempotent.
    pub fn stop(&mut self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Dropping the closure guarantees no re-arm even if a frame slipped
        // through before the cancel.
        self.raf_closure.borrow_mut().take();
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        self.state.borrow_mut().shutdown();
    }

    fn listen(
        &mut self,
        name: &'static str,
        to_event: fn(&MouseEvent) -> InputEvent,
    ) -> Result<(), JsValue> {
        let state = self.state.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            state.borrow_mut().push_input(to_event(&ev));
        });
        self.canvas
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        self.listeners.push((name, closure));
        Ok(())
    }

    fn attach_listeners(&mut self) -> Result<(), JsValue> {
        self.listen("mousedown", |ev| InputEvent::PointerDown {
            x: ev.offset_x() as f32,
            y: ev.offset_y() as f32,
        })?;
        self.listen("mouseup", |ev| InputEvent::PointerUp {
            x: ev.offset_x() as f32,
            y: ev.offset_y() as f32,
        })?;
        self.listen("mousemove", |ev| InputEvent::PointerMove {
            x: ev.offset_x() as f32,
            y: ev.offset_y() as f32,
        })?;
        Ok(())
    }

    fn arm_frame_loop(&self) -> Result<(), JsValue> {
        let state = self.state.clone();
        let surface = self.surface.clone();
        let raf_id = self.raf_id.clone();
        let cell = self.raf_closure.clone();
        let rearm = cell.clone();

        *cell.borrow_mut() = Some(Closure::new(move || {
            state.borrow_mut().frame(&mut *surface.borrow_mut());
            let next = rearm
                .borrow()
                .as_ref()
                .and_then(|cb| request_frame(cb).ok());
            *raf_id.borrow_mut() = next;
        }));

        if let Some(cb) = cell.borrow().as_ref() {
            *self.raf_id.borrow_mut() = Some(request_frame(cb)?);
        }
        Ok(())
    }
}

impl Drop for ShowRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &FrameClosure) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}
