//! Busy-wait timing model.
//!
//! The loop is `subs r0, #3; bcs 2b`: one iteration per three requested
//! cycles plus a final iteration that falls through when the subtraction
//! borrows. On Cortex-M0+ `subs` takes one cycle and a taken `bcs` two, so
//! every taken iteration costs exactly three cycles and the last one costs
//! two. Cortex-M33 is no faster per iteration.

pub const CYCLES_PER_ITERATION: u32 = 3;

/// Loop iterations executed for a request of `minimum_cycles`.
#[inline]
pub const fn iterations(minimum_cycles: u32) -> u64 {
    (minimum_cycles / CYCLES_PER_ITERATION) as u64 + 1
}

/// Cycles spent in the loop for a request of `minimum_cycles`.
#[inline]
pub const fn loop_cycles(minimum_cycles: u32) -> u64 {
    (iterations(minimum_cycles) - 1) * CYCLES_PER_ITERATION as u64 + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_waits_fewer_cycles_than_requested() {
        for c in (0..1000).chain([u32::MAX - 3, u32::MAX - 1, u32::MAX]) {
            assert!(loop_cycles(c) >= c as u64, "cycles {c}");
        }
    }

    #[test]
    fn overshoot_is_bounded_by_one_iteration() {
        for c in 0..1000u32 {
            assert!(loop_cycles(c) - (c as u64) < CYCLES_PER_ITERATION as u64 + 2);
        }
    }

    #[test]
    fn zero_runs_single_iteration() {
        assert_eq!(iterations(0), 1);
        assert_eq!(iterations(2), 1);
        assert_eq!(iterations(3), 2);
    }
}
