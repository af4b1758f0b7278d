/// Tick-counter-gated spawn rule.
///
/// The counter increments every frame unconditionally; only the spawn action
/// itself is gated. Once the counter has reached the interval, the first
/// frame the gate is open fires the governor and resets the counter to zero.
#[derive(Debug, Clone)]
pub struct SpawnGovernor {
    counter: u32,
    interval: u32,
}

impl SpawnGovernor {
    pub fn new(interval: u32) -> Self {
        SpawnGovernor {
            counter: 0,
            interval,
        }
    }

    /// Advance one frame. Returns true when a spawn should happen.
    pub fn tick(&mut self, gate: bool) -> bool {
        self.counter = self.counter.saturating_add(1);
        if gate && self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_at_interval() {
        let mut g = SpawnGovernor::new(80);
        for frame in 1..80 {
            assert!(!g.tick(true), "fired early at frame {}", frame);
        }
        assert!(g.tick(true), "should fire at frame 80");
        assert_eq!(g.counter(), 0);
    }

    #[test]
    fn closed_gate_blocks_but_counter_keeps_ticking() {
        let mut g = SpawnGovernor::new(5);
        for _ in 0..20 {
            assert!(!g.tick(false));
        }
        assert_eq!(g.counter(), 20);
        // First open-gated tick past the interval fires
        assert!(g.tick(true));
        assert_eq!(g.counter(), 0);
    }

    #[test]
    fn fires_every_interval_while_open() {
        let mut g = SpawnGovernor::new(5);
        let mut fired = 0;
        for _ in 0..25 {
            if g.tick(true) {
                fired += 1;
            }
        }
        assert_eq!(fired, 5);
    }
}
