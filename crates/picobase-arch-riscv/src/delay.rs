//! Busy-wait timing model.
//!
//! The loop is `addi a0, a0, -2; bgez a0, 2b`, assembled without compressed
//! instructions and word aligned so Hazard3 fetches each iteration in two
//! cycles. `bgez` is a signed test, so a request is spun in chunks of at
//! most `i32::MAX` cycles.

pub const CYCLES_PER_ITERATION: u32 = 2;

/// Largest request one pass of the loop handles.
pub const MAX_CHUNK: u32 = i32::MAX as u32;

/// Splits a request into full `MAX_CHUNK` passes and a final pass.
#[inline]
pub const fn chunks(minimum_cycles: u32) -> (u32, u32) {
    (minimum_cycles / MAX_CHUNK, minimum_cycles % MAX_CHUNK)
}

/// Loop iterations executed for one pass of `cycles` (at most `MAX_CHUNK`).
#[inline]
pub const fn pass_iterations(cycles: u32) -> u64 {
    (cycles / CYCLES_PER_ITERATION) as u64 + 1
}

/// Cycles spent for a whole request.
pub const fn loop_cycles(minimum_cycles: u32) -> u64 {
    let (full, rest) = chunks(minimum_cycles);
    let per_full = pass_iterations(MAX_CHUNK) * CYCLES_PER_ITERATION as u64;
    full as u64 * per_full + pass_iterations(rest) * CYCLES_PER_ITERATION as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_waits_fewer_cycles_than_requested() {
        let edges = [MAX_CHUNK - 1, MAX_CHUNK, MAX_CHUNK + 1, u32::MAX - 1, u32::MAX];
        for c in (0..1000).chain(edges) {
            assert!(loop_cycles(c) >= c as u64, "cycles {c}");
        }
    }

    #[test]
    fn requests_above_signed_range_are_split() {
        assert_eq!(chunks(MAX_CHUNK - 1), (0, MAX_CHUNK - 1));
        assert_eq!(chunks(MAX_CHUNK), (1, 0));
        assert_eq!(chunks(u32::MAX), (2, 1));
    }

    #[test]
    fn small_requests_overshoot_by_at_most_one_iteration() {
        for c in 0..1000u32 {
            assert!(loop_cycles(c) - (c as u64) <= CYCLES_PER_ITERATION as u64);
        }
    }
}
