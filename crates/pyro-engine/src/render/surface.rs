use glam::Vec2;

use crate::core::color::Hsla;

/// The drawing capability the simulation needs from its host.
///
/// The canvas implementation backs `fade` with an erase-by-alpha composite
/// (a low-opacity black fill in "destination-out" mode), which erases old
/// pixels proportionally and produces the persistent fading trails. After a
/// `fade` the surface must be left in additive blend mode so overlapping
/// strokes intensify instead of occluding.
pub trait Surface {
    /// Partially erase the previous frame. `strength` is the fraction of
    /// remaining alpha removed, in [0, 1].
    fn fade(&mut self, strength: f32);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Hsla);

    /// Stroke a full circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
}

/// Surface that discards every draw call. Lets the simulation tick headless.
pub struct NullSurface;

impl Surface for NullSurface {
    fn fade(&mut self, _strength: f32) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Hsla) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Hsla) {}
}
