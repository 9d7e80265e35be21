//! Color selection strategies.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::ColorPicker;

/// Uniform random choice over the whole palette.
///
/// Uses the thread-local generator, so concurrent logger construction needs no
/// shared lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl RandomPicker {
    pub fn new() -> Self {
        Self
    }
}

impl ColorPicker for RandomPicker {
    fn pick(&self, palette: &[u8]) -> Option<u8> {
        if palette.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..palette.len());
        Some(palette[index])
    }
}

/// Reproducible random choice from a fixed seed.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ColorPicker for SeededPicker {
    fn pick(&self, palette: &[u8]) -> Option<u8> {
        if palette.is_empty() {
            return None;
        }
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let index = rng.gen_range(0..palette.len());
        Some(palette[index])
    }
}

/// Always the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub u8);

impl ColorPicker for FixedPicker {
    fn pick(&self, _palette: &[u8]) -> Option<u8> {
        Some(self.0)
    }
}
