use glam::Vec2;

use super::queue::InputEvent;

/// Cursor position and press state, folded from drained pointer events.
///
/// This is the only input the spawn governors read: two scalars and one
/// flag, written once per frame before the governors tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl PointerState {
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.x = x;
                self.y = y;
                self.pressed = true;
            }
            InputEvent::PointerUp { x, y } => {
                self.x = x;
                self.y = y;
                self.pressed = false;
            }
            InputEvent::PointerMove { x, y } => {
                self.x = x;
                self.y = y;
            }
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_arms_and_up_disarms() {
        let mut p = PointerState::default();
        p.apply(InputEvent::PointerDown { x: 3.0, y: 4.0 });
        assert!(p.pressed);
        assert_eq!(p.position(), Vec2::new(3.0, 4.0));
        p.apply(InputEvent::PointerUp { x: 5.0, y: 6.0 });
        assert!(!p.pressed);
        assert_eq!(p.position(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn move_keeps_press_state() {
        let mut p = PointerState::default();
        p.apply(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        p.apply(InputEvent::PointerMove { x: 9.0, y: 9.0 });
        assert!(p.pressed);
        assert_eq!(p.position(), Vec2::new(9.0, 9.0));
    }
}
