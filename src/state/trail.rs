//! Decorative cursor trail. Purely cosmetic; shares nothing with the other
//! controllers.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

use rand::Rng;

use crate::config::{Timings, TrailConfig};

/// A spark to place at pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
}

impl Spark {
    /// Inline style for the spark element: fixed at the pointer, fading for
    /// `lifetime_ms`, never intercepting clicks.
    #[must_use]
    pub fn css(&self, trail: &TrailConfig, lifetime_ms: u32) -> String {
        format!(
            "position:fixed;left:{x}px;top:{y}px;width:{size}px;height:{size}px;background:{color};\
             border-radius:50%;pointer-events:none;animation:{animation} {seconds}s ease-out forwards;\
             z-index:{z}",
            x = self.x,
            y = self.y,
            size = trail.size_px,
            color = trail.color,
            animation = trail.animation,
            seconds = f64::from(lifetime_ms) / 1000.0,
            z = trail.z_index,
        )
    }
}

/// Rolls the dice on every pointer move.
#[derive(Debug)]
pub struct TrailEmitter<R> {
    rng: R,
    probability: f64,
    lifetime_ms: u32,
}

impl<R: Rng> TrailEmitter<R> {
    #[must_use]
    pub fn new(rng: R, trail: &TrailConfig, timings: &Timings) -> Self {
        Self { rng, probability: trail.probability.clamp(0.0, 1.0), lifetime_ms: timings.spark_lifetime_ms }
    }

    /// How long a spawned spark stays before it is removed.
    #[must_use]
    pub fn lifetime_ms(&self) -> u32 {
        self.lifetime_ms
    }

    /// Decide whether this pointer move spawns a spark.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<Spark> {
        self.rng.random_bool(self.probability).then_some(Spark { x, y })
    }
}
