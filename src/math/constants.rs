/* Copyright 2020 @Yuchen Wong */

pub type Float = f64;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 1;

/// Rounds of mixing per generated value.
pub const MIX_ROUNDS: usize = 4;

// Xorshift triple applied each round: right, left, right.
pub const MIX_SHIFT_A: u32 = 7;
pub const MIX_SHIFT_B: u32 = 9;
pub const MIX_SHIFT_C: u32 = 13;
