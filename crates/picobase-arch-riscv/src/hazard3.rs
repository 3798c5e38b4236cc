use core::arch::asm;

use foundation::Intrinsics;

use crate::delay;

/// RP2350 Hazard3 backend.
pub struct Hazard3;

impl Hazard3 {
    #[inline(always)]
    fn spin(cycles: u32) {
        unsafe {
            asm!(
                ".option push",
                ".option norvc",
                ".p2align 2",
                "2:",
                "addi {0}, {0}, -2",
                "bgez {0}, 2b",
                ".option pop",
                inout(reg) cycles => _,
                options(nostack),
            )
        }
    }
}

// The `riscv` wrappers are safe or unsafe depending on the crate release.
#[allow(unused_unsafe)]
impl Intrinsics for Hazard3 {
    const BUSY_WAIT_CYCLES_PER_ITERATION: u32 = delay::CYCLES_PER_ITERATION;

    #[inline(always)]
    fn compiler_memory_barrier() {
        unsafe { asm!("", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn nop() {
        unsafe { riscv::asm::nop() }
    }

    // Hazard3's unblock hint is not used; a full fence is issued instead.
    #[inline(always)]
    fn sev() {
        unsafe { asm!("fence", options(nostack, preserves_flags)) }
    }

    // Hazard3's block hint is not used; wfi also wakes on interrupts.
    #[inline(always)]
    fn wfe() {
        unsafe { riscv::asm::wfi() }
    }

    #[inline(always)]
    fn wfi() {
        unsafe { riscv::asm::wfi() }
    }

    #[inline(always)]
    fn dmb() {
        unsafe { asm!("fence rw, rw", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn dsb() {
        unsafe { asm!("fence rw, rw", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn isb() {
        unsafe { asm!("fence.i", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn breakpoint() {
        unsafe { riscv::asm::ebreak() }
    }

    /// Reading the interrupt context needs `meicontext`; until then this
    /// reports "not in an exception".
    #[inline(always)]
    fn current_exception() -> u32 {
        0
    }

    /// Non-secure is an Arm concept.
    #[inline(always)]
    fn processor_state_is_nonsecure() -> bool {
        false
    }

    #[inline(always)]
    fn busy_wait_at_least_cycles(minimum_cycles: u32) {
        let (full, rest) = delay::chunks(minimum_cycles);
        for _ in 0..full {
            Self::spin(delay::MAX_CHUNK);
        }
        Self::spin(rest);
    }

    #[inline(always)]
    fn mul_instruction(a: i32, b: i32) -> i32 {
        let product: i32;
        unsafe {
            asm!(
                "mul {0}, {1}, {2}",
                lateout(reg) product,
                in(reg) a,
                in(reg) b,
                options(pure, nomem, nostack),
            )
        };
        product
    }
}
