/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in [0, 1) from the top 24 bits (exact in f32)
#[inline]
pub(super) fn next_unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform float in [min, max)
#[inline]
pub(super) fn next_range(state: &mut u32, min: f32, max: f32) -> f32 {
    min + next_unit(state) * (max - min)
}

/// xorshift never leaves zero, so remap it
#[inline]
pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 {
        0x9E37_79B9
    } else {
        seed
    }
}
