use glam::Vec2;

use super::particle::Particle;
use crate::core::rng::Rng;

/// Fragments per burst for each firework kind. Unrecognized tags produce an
/// empty burst rather than an error.
pub fn burst_count(kind: u8) -> usize {
    match kind {
        0 => 30,
        1 => 50,
        2 => 20,
        3 => 40,
        _ => 0,
    }
}

/// Append one burst of particles to the caller-owned collection.
///
/// Each fragment draws an independently randomized base hue, so a burst has
/// a per-particle palette rather than one shared explosion color.
pub fn spawn_burst(particles: &mut Vec<Particle>, point: Vec2, kind: u8, rng: &mut Rng) {
    for _ in 0..burst_count(kind) {
        let base_hue = rng.range(0.0, 360.0);
        particles.push(Particle::new(point, kind, base_hue, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_table_exact() {
        assert_eq!(burst_count(0), 30);
        assert_eq!(burst_count(1), 50);
        assert_eq!(burst_count(2), 20);
        assert_eq!(burst_count(3), 40);
        assert_eq!(burst_count(4), 0);
        assert_eq!(burst_count(255), 0);
    }

    #[test]
    fn spawn_appends_to_existing() {
        let mut rng = Rng::new(8);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, Vec2::new(50.0, 50.0), 1, &mut rng);
        assert_eq!(particles.len(), 50);
        spawn_burst(&mut particles, Vec2::new(60.0, 60.0), 2, &mut rng);
        assert_eq!(particles.len(), 70);
    }

    #[test]
    fn unknown_kind_spawns_nothing() {
        let mut rng = Rng::new(8);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, Vec2::ZERO, 99, &mut rng);
        assert!(particles.is_empty());
    }

    #[test]
    fn fragments_start_at_impact_point() {
        let mut rng = Rng::new(8);
        let mut particles = Vec::new();
        let point = Vec2::new(123.0, 45.0);
        spawn_burst(&mut particles, point, 0, &mut rng);
        assert!(particles.iter().all(|p| p.position() == point));
    }
}
