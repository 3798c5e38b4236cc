use core::arch::asm;

use cfg_if::cfg_if;
use foundation::Intrinsics;

use crate::{cpu, delay};

/// Cortex-M0+ / Cortex-M33 backend.
pub struct Thumb;

impl Intrinsics for Thumb {
    const BUSY_WAIT_CYCLES_PER_ITERATION: u32 = delay::CYCLES_PER_ITERATION;

    #[inline(always)]
    fn compiler_memory_barrier() {
        unsafe { asm!("", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn nop() {
        cfg_if! {
            if #[cfg(feature = "rp2350")] {
                unsafe { asm!("nop.w", options(nomem, nostack, preserves_flags)) }
            } else {
                unsafe { asm!("nop", options(nomem, nostack, preserves_flags)) }
            }
        }
    }

    #[inline(always)]
    fn sev() {
        unsafe { asm!("sev", options(nomem, nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn wfe() {
        unsafe { asm!("wfe", options(nomem, nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn wfi() {
        unsafe { asm!("wfi", options(nomem, nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn dmb() {
        unsafe { asm!("dmb", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn dsb() {
        unsafe { asm!("dsb", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn isb() {
        unsafe { asm!("isb", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn breakpoint() {
        unsafe { asm!("bkpt #0", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    fn current_exception() -> u32 {
        let ipsr: u32;
        unsafe { asm!("mrs {}, ipsr", out(reg) ipsr, options(nomem, nostack, preserves_flags)) };
        cpu::exception_number(ipsr)
    }

    #[inline(always)]
    fn processor_state_is_nonsecure() -> bool {
        cfg_if! {
            if #[cfg(feature = "rp2350")] {
                let tt: u32;
                // tt r0, r0 (address 0). Emitted as raw T1 encoding so the
                // assembler does not need the security extension enabled.
                unsafe {
                    asm!(
                        ".inst.w 0xe840f000",
                        inout("r0") 0u32 => tt,
                        options(nomem, nostack, preserves_flags),
                    )
                };
                cpu::tt_is_nonsecure(tt)
            } else {
                // Armv6-M has no security state.
                false
            }
        }
    }

    #[inline(always)]
    fn busy_wait_at_least_cycles(minimum_cycles: u32) {
        unsafe {
            asm!(
                "2:",
                "subs r0, #3",
                "bcs 2b",
                inout("r0") minimum_cycles => _,
                options(nostack),
            )
        }
    }

    #[inline(always)]
    fn mul_instruction(a: i32, b: i32) -> i32 {
        let product: i32;
        unsafe {
            asm!(
                "muls r0, r1, r0",
                inout("r0") a => product,
                in("r1") b,
                options(pure, nomem, nostack),
            )
        };
        product
    }
}
