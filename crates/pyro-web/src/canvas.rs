use glam::Vec2;
use pyro_engine::{Hsla, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`Surface`] implementation over a canvas 2D context.
///
/// `fade` fills the whole canvas with low-opacity black in "destination-out"
/// composite mode, erasing old pixels proportionally (this is what produces
/// the fading trails), then leaves the context in "lighter" mode so the
/// frame's strokes blend additively.
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Canvas2d {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

fn css(color: Hsla) -> String {
    format!(
        "hsla({}, {}%, {}%, {})",
        color.hue, color.saturation, color.lightness, color.alpha
    )
}

impl Surface for Canvas2d {
    fn fade(&mut self, strength: f32) {
        let _ = self.ctx.set_global_composite_operation("destination-out");
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {})", strength));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        let _ = self.ctx.set_global_composite_operation("lighter");
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Hsla) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&css(color));
        self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_stroke_style_str(&css(color));
        self.ctx.stroke();
    }
}
