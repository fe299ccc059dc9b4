// Rising background particles: spawn parameters and lifetime.

use rand::Rng;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTuning {
    pub spawn_interval_ms: u32,
    pub burst_count: usize,
    pub burst_spacing_ms: u32,
    pub left_pct: Range<f32>,
    pub duration_s: Range<f32>,
    pub delay_s: Range<f32>,
    pub size_px: Range<f32>,
    pub opacity: Range<f32>,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 200,
            burst_count: 20,
            burst_spacing_ms: 100,
            left_pct: 0.0..100.0,
            duration_s: 4.0..10.0,
            delay_s: 0.0..2.0,
            size_px: 1.0..4.0,
            opacity: 0.3..1.0,
        }
    }
}

/// Randomized appearance of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub size_px: f32,
    pub opacity: f32,
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, t: &ParticleTuning) -> Self {
        Self {
            left_pct: sample(rng, &t.left_pct),
            duration_s: sample(rng, &t.duration_s),
            delay_s: sample(rng, &t.delay_s),
            size_px: sample(rng, &t.size_px),
            opacity: sample(rng, &t.opacity),
        }
    }

    /// Time from creation to removal: the animation delay plus one full run.
    pub fn lifetime_ms(&self) -> u32 {
        ((self.duration_s + self.delay_s) * 1000.0).round() as u32
    }

    /// Inline style properties for the particle element.
    pub fn style_props(&self) -> [(&'static str, String); 7] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("bottom", "-10px".to_string()),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("opacity", format!("{}", self.opacity)),
        ]
    }
}

/// Delays of the start-up burst, one particle every `burst_spacing_ms`.
pub fn burst_schedule(t: &ParticleTuning) -> impl Iterator<Item = u32> + '_ {
    (0..t.burst_count).map(move |i| i as u32 * t.burst_spacing_ms)
}
