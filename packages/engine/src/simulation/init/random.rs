/// xorshift32: tiny deterministic PRNG for randomized resets.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// xorshift never leaves 0, so a zero seed is bumped to a fixed non-zero one.
#[inline]
pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}

/// Roll 1..=100 and report whether it lands in the top `percent`.
#[inline]
pub(super) fn roll_alive(state: &mut u32, percent: u32) -> bool {
    let draw = xorshift32(state) % 100 + 1;
    draw > 100 - percent.min(100)
}
