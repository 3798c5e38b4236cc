/// Single-instruction primitives provided by exactly one backend per build.
///
/// Every method maps to one (at most two) target instructions. Backends are
/// zero-sized types; `picobase_macros::export_intrinsics!` turns an
/// implementation into the exported C symbols, so the Rust-callable and the
/// C-callable paths share one body.
pub trait Intrinsics {
    /// Cycles spent in one iteration of the busy-wait loop.
    const BUSY_WAIT_CYCLES_PER_ITERATION: u32;

    /// Compiler-only fence: no instruction, but memory accesses are not
    /// reordered across the call.
    fn compiler_memory_barrier();

    fn nop();
    fn sev();
    fn wfe();
    fn wfi();

    /// Orders memory accesses without waiting for completion.
    fn dmb();
    /// Waits for completion of all prior memory accesses.
    fn dsb();
    /// Flushes the instruction pipeline.
    fn isb();

    fn breakpoint();

    /// Active exception number, or 0 when not in an exception (or when the
    /// backend cannot tell).
    fn current_exception() -> u32;

    /// `false` on architectures without a security state.
    fn processor_state_is_nonsecure() -> bool;

    /// Spins for no fewer than `minimum_cycles` cycles. May overshoot by up
    /// to one loop iteration.
    fn busy_wait_at_least_cycles(minimum_cycles: u32);

    fn mul_instruction(a: i32, b: i32) -> i32;

    /// Divide-by-zero fixup: the quotient is the dividend.
    #[inline(always)]
    fn idiv0(dividend: i32) -> i32 {
        dividend
    }

    /// 64-bit divide-by-zero fixup: the quotient is the dividend.
    #[inline(always)]
    fn ldiv0(dividend: i64) -> i64 {
        dividend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exercises the provided methods without any hardware behind them.
    struct Inert;

    impl Intrinsics for Inert {
        const BUSY_WAIT_CYCLES_PER_ITERATION: u32 = 1;

        fn compiler_memory_barrier() {}
        fn nop() {}
        fn sev() {}
        fn wfe() {}
        fn wfi() {}
        fn dmb() {}
        fn dsb() {}
        fn isb() {}
        fn breakpoint() {}
        fn current_exception() -> u32 {
            0
        }
        fn processor_state_is_nonsecure() -> bool {
            false
        }
        fn busy_wait_at_least_cycles(_minimum_cycles: u32) {}
        fn mul_instruction(a: i32, b: i32) -> i32 {
            a.wrapping_mul(b)
        }
    }

    #[test]
    fn idiv0_returns_dividend() {
        for r in [0, 1, -1, i32::MIN, i32::MAX, 42, -42] {
            assert_eq!(Inert::idiv0(r), r);
        }
    }

    #[test]
    fn ldiv0_returns_dividend() {
        for r in [0, 1, -1, i64::MIN, i64::MAX, 1 << 40, -(1 << 40)] {
            assert_eq!(Inert::ldiv0(r), r);
        }
    }
}
