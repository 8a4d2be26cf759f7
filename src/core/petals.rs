use super::constants::*;
use rand::prelude::*;

/// Randomized parameters for one falling petal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalSpec {
    pub left_vw: f64,
    pub duration_secs: f64,
    pub size_px: f64,
}

impl PetalSpec {
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}vw;animation-duration:{:.2}s;width:{:.2}px;height:{:.2}px",
            self.left_vw, self.duration_secs, self.size_px, self.size_px
        )
    }

    /// Milliseconds until this petal has finished falling and is replaced.
    pub fn lifetime_ms(&self) -> i32 {
        (self.duration_secs * 1000.0).round() as i32
    }
}

/// Endless source of petals. The rain keeps `PETAL_POOL_SIZE` of them alive by
/// pulling a replacement every time one lands.
pub struct PetalStream {
    rng: StdRng,
}

impl PetalStream {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Iterator for PetalStream {
    type Item = PetalSpec;

    fn next(&mut self) -> Option<PetalSpec> {
        Some(PetalSpec {
            left_vw: self.rng.gen::<f64>() * 100.0,
            duration_secs: PETAL_MIN_DURATION_SECS + self.rng.gen::<f64>() * PETAL_DURATION_SPAN_SECS,
            size_px: PETAL_MIN_SIZE_PX + self.rng.gen::<f64>() * PETAL_SIZE_SPAN_PX,
        })
    }
}

/// Delay before the `slot`-th petal of the initial pool is spawned.
#[inline]
pub fn initial_spawn_delay_ms(slot: usize) -> i32 {
    slot as i32 * PETAL_STAGGER_MS
}
