// Copyright @yucwang 2026

use crate::core::word::RegisterWord;
use crate::math::constants::{Float, MIX_ROUNDS, MIX_SHIFT_A, MIX_SHIFT_B, MIX_SHIFT_C};

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Raised by [`BitMixingGenerator::try_random_range`] when `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError<W> {
    pub min: W,
    pub max: W,
}

impl<W: fmt::Display> fmt::Display for InvalidRangeError<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid range: min {} is greater than max {}", self.min, self.max)
    }
}

impl<W: fmt::Debug + fmt::Display> std::error::Error for InvalidRangeError<W> {}

/// Shift-register generator with xorshift feedback.
///
/// Every output runs a fixed number of mixing rounds over a working copy of
/// the state. Each round xorshifts the working value and feeds its low bit
/// back in from the right, while the register itself rotates right by one.
/// The rotated register is dropped at the end and the mixed value becomes
/// the new state.
///
/// A zero seed is replaced by one derived from the wall clock, so such
/// generators are not reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMixingGenerator<W: RegisterWord> {
    seed: W,
    state: W,
}

pub type Lfsr32 = BitMixingGenerator<u32>;
pub type Lfsr64 = BitMixingGenerator<u64>;

impl<W: RegisterWord> BitMixingGenerator<W> {
    pub fn new(seed: W) -> Self {
        let seed = if seed == W::ZERO { clock_seed() } else { seed };
        Self { seed, state: seed }
    }

    /// Seed the generator was started from, after clock substitution.
    pub fn seed(&self) -> W {
        self.seed
    }

    /// Last generated value, or the seed before the first call.
    pub fn state(&self) -> W {
        self.state
    }

    /// Next raw value of the sequence.
    pub fn random(&mut self) -> W {
        self.advance()
    }

    /// Next value scaled into `[0, 1]`. May be exactly 1.0.
    pub fn rand(&mut self) -> Float {
        self.advance().to_float() / W::MAX.to_float()
    }

    /// Next value scaled into `[min, max]`.
    ///
    /// `max` is only reached when [`rand`](Self::rand) yields 1.0. With
    /// `min > max` the span wraps around the word instead of being swapped;
    /// use [`try_random_range`](Self::try_random_range) to reject that case.
    pub fn random_range(&mut self, min: W, max: W) -> W {
        let unit = self.rand();
        let span = max.wrapping_sub(min);
        let offset = W::from_float(span.to_float() * unit);
        // Rounding a wide span through f64 can land past it.
        min.wrapping_add(offset.min(span))
    }

    /// Like [`random_range`](Self::random_range), but rejects `min > max`
    /// before touching the state.
    pub fn try_random_range(&mut self, min: W, max: W) -> Result<W, InvalidRangeError<W>> {
        if min > max {
            return Err(InvalidRangeError { min, max });
        }
        Ok(self.random_range(min, max))
    }

    fn advance(&mut self) -> W {
        let mut mixed = self.state;
        let mut register = self.state;
        for _ in 0..MIX_ROUNDS {
            mixed = mixed ^ mixed.shift_right(MIX_SHIFT_A);
            mixed = mixed ^ mixed.shift_left(MIX_SHIFT_B);
            mixed = mixed ^ mixed.shift_right(MIX_SHIFT_C);
            let feedback = mixed & W::ONE;
            mixed = mixed.shift_left(1).wrapping_add(feedback);
            // The register lane never feeds the mix.
            register = register.shift_right(1) | register.shift_left(W::BITS - 1);
        }
        self.state = mixed;
        self.state
    }
}

impl<W: RegisterWord> Default for BitMixingGenerator<W> {
    fn default() -> Self {
        Self::new(W::ONE)
    }
}

impl<W: RegisterWord> Iterator for BitMixingGenerator<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        Some(self.random())
    }
}

// Folds the nanosecond clock into the word so narrow widths still see the
// fast-moving low bits. Zero is a fixed point of the mix, so it maps to one.
fn clock_seed<W: RegisterWord>() -> W {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0);

    let mut folded = W::ZERO;
    let mut rest = nanos;
    while rest != 0 {
        folded = folded ^ W::from_u128(rest);
        rest = rest.checked_shr(W::BITS).unwrap_or(0);
    }

    let seed = if folded == W::ZERO { W::ONE } else { folded };
    log::debug!("Seeding generator from clock: {} ns -> {}.", nanos, seed);
    seed
}
