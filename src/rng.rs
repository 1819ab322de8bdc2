// SPDX-License-Identifier: PMPL-1.0-or-later

//! Randomness seam for the transform pipeline.
//!
//! Every "random" choice the scrambler and pronunciation generator make is
//! drawn through [`RandomSource`], so the production code can inject a
//! content-seeded generator (reproducible output) or an OS-entropy source
//! (the Draconic path), and tests can inject a fixed sequence.
//!
//! The seeded generator is a plain 32-bit linear congruential generator.
//! All seed arithmetic wraps modulo 2^32; overflow is expected behavior,
//! not an error.

/// A stream of floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    fn next_below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let idx = (self.next_f64() * n as f64) as usize;
        idx.min(n - 1)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Content-seeded LCG (Numerical Recipes constants, modulus 2^32).
///
/// Identical seeds yield identical streams across calls and processes,
/// which is what gives every non-Draconic language its determinism
/// guarantee: the seed comes only from the input content, never from the
/// clock or a shared counter.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.state) / 4_294_967_296.0
    }
}

/// OS-entropy source backing the Draconic renderer.
///
/// Not reproducible by design. Reads entropy in small batches to avoid a
/// syscall per draw.
pub struct EntropyRng {
    buf: [u8; 64],
    pos: usize,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            buf: [0; 64],
            pos: 64,
        }
    }

    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buf.len() {
            // getrandom only fails on broken platforms; fall back to a
            // time-derived value rather than surfacing an error from a
            // flavor-text path.
            if getrandom::getrandom(&mut self.buf).is_err() {
                let nanos = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.subsec_nanos())
                    .unwrap_or(0);
                let mut state = SeededRng::new(nanos);
                for b in self.buf.iter_mut() {
                    *b = (state.next_f64() * 256.0) as u8;
                }
            }
            self.pos = 0;
        }
        let bytes = [
            self.buf[self.pos],
            self.buf[self.pos + 1],
            self.buf[self.pos + 2],
            self.buf[self.pos + 3],
        ];
        self.pos += 4;
        u32::from_le_bytes(bytes)
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Seed for the word scrambler: the language name's length folded with the
/// word's character codes through a *31 polynomial rolling hash.
pub fn word_seed(word: &str, language_name: &str) -> u32 {
    let mut seed = language_name.len() as u32;
    for ch in word.chars() {
        seed = seed.wrapping_mul(31).wrapping_add(ch as u32);
    }
    seed
}

/// FNV-1a over a line of text, used to seed the pronunciation generator.
pub fn fnv1a_32(text: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in text.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}
