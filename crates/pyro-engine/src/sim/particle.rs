use glam::Vec2;

use crate::core::color::{jitter_hue, Hsla};
use crate::core::rng::Rng;
use crate::render::Surface;

const TRAIL_LEN: usize = 5;
const FRICTION: f32 = 0.95;
const HUE_SPREAD: f32 = 50.0;

/// A short-lived explosion fragment flying out of a firework's impact point.
///
/// Direction is fixed at creation; speed decays by friction while gravity
/// pulls the fragment down, and alpha fades it out over a second or two.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    /// Last few positions, oldest first.
    trail: [Vec2; TRAIL_LEN],
    angle: f32,
    speed: f32,
    gravity: f32,
    hue: f32,
    brightness: f32,
    alpha: f32,
    decay: f32,
}

impl Particle {
    /// Build one fragment of a burst of the given kind.
    ///
    /// Kind 1 is a heavy, fast-falling burst; kind 2 ignores the base hue for
    /// a rainbow look; kind 3 hangs gently. Any other kind (including tags
    /// outside the known set) gets the baseline profile.
    pub fn new(position: Vec2, kind: u8, base_hue: f32, rng: &mut Rng) -> Self {
        let angle = rng.range(0.0, std::f32::consts::TAU);
        let (speed, gravity) = match kind {
            1 => (rng.range(2.0, 14.0), 1.6),
            3 => (rng.range(1.0, 6.0), 0.5),
            _ => (rng.range(1.0, 10.0), 1.0),
        };
        let hue = if kind == 2 {
            rng.range(0.0, 360.0)
        } else {
            jitter_hue(base_hue, HUE_SPREAD, rng)
        };
        Particle {
            position,
            trail: [position; TRAIL_LEN],
            angle,
            speed,
            gravity,
            hue,
            brightness: rng.range(50.0, 80.0),
            alpha: 1.0,
            decay: rng.range(0.015, 0.03),
        }
    }

    /// Advance one frame. Returns false once the fragment has faded out.
    ///
    /// The cutoff is `alpha <= decay`, one decrement short of full
    /// transparency. Deliberate visual tuning, not an off-by-one.
    pub fn update(&mut self) -> bool {
        self.trail.rotate_left(1);
        self.trail[TRAIL_LEN - 1] = self.position;

        self.speed *= FRICTION;
        self.position.x += self.angle.cos() * self.speed;
        self.position.y += self.angle.sin() * self.speed + self.gravity;

        self.alpha -= self.decay;
        self.alpha > self.decay
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let color = Hsla::hsl(self.hue, self.brightness).with_alpha(self.alpha);
        surface.stroke_line(self.trail[0], self.position, color);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_decreases_every_frame() {
        let mut rng = Rng::new(3);
        let mut p = Particle::new(Vec2::ZERO, 0, 120.0, &mut rng);
        let mut last = p.alpha();
        while p.update() {
            assert!(p.alpha() < last, "alpha did not decrease");
            last = p.alpha();
        }
    }

    #[test]
    fn expires_once_alpha_reaches_decay() {
        let mut rng = Rng::new(3);
        let mut p = Particle::new(Vec2::ZERO, 0, 120.0, &mut rng);
        while p.update() {}
        assert!(p.alpha() <= p.decay());
        // Fades out early, but never past full transparency by more than one step
        assert!(p.alpha() > -p.decay());
    }

    #[test]
    fn kind_speed_ranges() {
        let mut rng = Rng::new(11);
        for _ in 0..200 {
            let heavy = Particle::new(Vec2::ZERO, 1, 0.0, &mut rng);
            assert!((2.0..14.0).contains(&heavy.speed));
            assert_eq!(heavy.gravity, 1.6);

            let gentle = Particle::new(Vec2::ZERO, 3, 0.0, &mut rng);
            assert!((1.0..6.0).contains(&gentle.speed));
            assert_eq!(gentle.gravity, 0.5);

            // Unknown tags fall back to the baseline profile
            let fallback = Particle::new(Vec2::ZERO, 200, 0.0, &mut rng);
            assert!((1.0..10.0).contains(&fallback.speed));
            assert_eq!(fallback.gravity, 1.0);
        }
    }

    #[test]
    fn baseline_hue_stays_near_base() {
        let mut rng = Rng::new(17);
        for _ in 0..200 {
            let p = Particle::new(Vec2::ZERO, 0, 180.0, &mut rng);
            assert!((130.0..=230.0).contains(&p.hue()));
        }
    }

    #[test]
    fn gravity_biases_motion_downward() {
        let mut rng = Rng::new(23);
        // Averaged over many fragments the gravity term dominates the
        // symmetric radial spread, so net displacement is downward (y-down).
        let mut total_dy = 0.0;
        for _ in 0..200 {
            let mut p = Particle::new(Vec2::ZERO, 0, 0.0, &mut rng);
            while p.update() {}
            total_dy += p.position().y;
        }
        assert!(total_dy > 0.0, "fragments should fall on average");
    }
}
