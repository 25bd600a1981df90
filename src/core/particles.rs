use super::constants::{PARTICLE_DELAY_MAX_SEC, PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_SPAN_PX};
use rand::Rng;

/// One decorative background dot. Never changes after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_sec: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            size_px: rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX + PARTICLE_SIZE_MIN_PX,
            delay_sec: rng.gen::<f64>() * PARTICLE_DELAY_MAX_SEC,
        }
    }

    /// Inline style for the dot element.
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {s}px; height: {s}px; animation-delay: {}s",
            self.left_pct,
            self.top_pct,
            self.delay_sec,
            s = self.size_px
        )
    }
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
