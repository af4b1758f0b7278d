use glam::Vec2;

use crate::core::color::Hsla;
use crate::core::rng::Rng;
use crate::render::Surface;

const TRAIL_LEN: usize = 3;
const LAUNCH_SPEED: f32 = 2.0;
const ACCELERATION: f32 = 1.05;
const MARKER_MIN: f32 = 1.0;
const MARKER_MAX: f32 = 8.0;
const MARKER_STEP: f32 = 0.3;

/// Where and how a firework burst. Reported exactly once, the frame the
/// projectile reaches its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub point: Vec2,
    pub kind: u8,
}

/// A rising projectile traveling on a straight ray from launch point to
/// target, accelerating as it goes. On arrival it reports an [`Impact`] and
/// the scheduler removes it.
#[derive(Debug, Clone)]
pub struct Firework {
    position: Vec2,
    origin: Vec2,
    target: Vec2,
    kind: u8,
    /// Last few positions, oldest first. Drawn as a fading line.
    trail: [Vec2; TRAIL_LEN],
    angle: f32,
    speed: f32,
    brightness: f32,
    /// Pulsating radius of the target marker ring. Cycles 1 → 8 → 1; purely
    /// cosmetic, not a countdown.
    marker_radius: f32,
    distance_to_target: f32,
    distance_traveled: f32,
}

impl Firework {
    pub fn new(origin: Vec2, target: Vec2, kind: u8, rng: &mut Rng) -> Self {
        let delta = target - origin;
        Firework {
            position: origin,
            origin,
            target,
            kind,
            trail: [origin; TRAIL_LEN],
            angle: delta.y.atan2(delta.x),
            speed: LAUNCH_SPEED,
            brightness: rng.range(50.0, 70.0),
            marker_radius: MARKER_MIN,
            distance_to_target: delta.length(),
            distance_traveled: 0.0,
        }
    }

    /// Advance one frame. Returns the impact once the target is reached or
    /// passed; the caller removes the firework after handling it.
    pub fn update(&mut self) -> Option<Impact> {
        self.trail.rotate_left(1);
        self.trail[TRAIL_LEN - 1] = self.position;

        if self.marker_radius < MARKER_MAX {
            self.marker_radius += MARKER_STEP;
        } else {
            self.marker_radius = MARKER_MIN;
        }

        self.speed *= ACCELERATION;
        let step = Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed;

        // Distance is recomputed from the origin rather than accumulated, so
        // floating error cannot compound along the ray.
        let next = self.position + step;
        self.distance_traveled = (next - self.origin).length();

        if self.distance_traveled >= self.distance_to_target {
            Some(Impact {
                point: self.target,
                kind: self.kind,
            })
        } else {
            self.position = next;
            None
        }
    }

    /// Stroke the trail plus the target marker ring. `hue` is the shared
    /// per-frame hue chosen by the scheduler.
    pub fn draw(&self, surface: &mut dyn Surface, hue: f32) {
        let color = Hsla::hsl(hue, self.brightness);
        surface.stroke_line(self.trail[0], self.position, color);
        surface.stroke_circle(self.target, self.marker_radius, color);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_firework() -> Firework {
        let mut rng = Rng::new(42);
        Firework::new(
            Vec2::new(100.0, 500.0),
            Vec2::new(100.0, 100.0),
            0,
            &mut rng,
        )
    }

    #[test]
    fn distance_is_monotonic_until_arrival() {
        let mut fw = test_firework();
        let mut last = 0.0;
        for _ in 0..1000 {
            if fw.update().is_some() {
                return;
            }
            assert!(
                fw.distance_traveled() >= last,
                "distance regressed: {} < {}",
                fw.distance_traveled(),
                last
            );
            last = fw.distance_traveled();
        }
        panic!("firework never arrived");
    }

    #[test]
    fn arrival_reports_own_target_and_kind() {
        let mut rng = Rng::new(1);
        let mut fw = Firework::new(Vec2::new(0.0, 300.0), Vec2::new(250.0, 40.0), 3, &mut rng);
        let impact = loop {
            if let Some(impact) = fw.update() {
                break impact;
            }
        };
        assert_eq!(impact.point, Vec2::new(250.0, 40.0));
        assert_eq!(impact.kind, 3);
    }

    #[test]
    fn travels_straight_toward_target() {
        let mut fw = test_firework();
        for _ in 0..10 {
            if fw.update().is_some() {
                break;
            }
        }
        // Vertical launch: x stays put, y decreases toward the target
        assert_eq!(fw.position().x, 100.0);
        assert!(fw.position().y < 500.0);
    }

    #[test]
    fn marker_radius_cycles() {
        let mut fw = test_firework();
        // 1.0 + 24 * 0.3 > 8, so within 30 updates the radius must wrap
        let mut wrapped = false;
        let mut grew = false;
        for _ in 0..30 {
            let before = fw.marker_radius;
            if fw.update().is_some() {
                break;
            }
            if fw.marker_radius > before {
                grew = true;
            }
            if fw.marker_radius < before {
                wrapped = true;
            }
        }
        assert!(grew && wrapped, "marker should pulse 1 -> 8 -> 1");
    }
}
