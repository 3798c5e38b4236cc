//! Halt entry points bound to the linked intrinsics backend.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_os = "none")] {
        use crate::halt::{self, Diagnostic, Halt};

        // Provided by the intrinsics backend (`export_intrinsics!`).
        extern "C" {
            fn __wfi();
            fn __breakpoint();
        }

        pub struct Platform;

        impl Halt for Platform {
            fn idle_halt() -> ! {
                loop {
                    unsafe { __wfi() }
                }
            }

            fn trap_halt(_diagnostic: Diagnostic) -> ! {
                loop {
                    unsafe { __breakpoint() }
                }
            }
        }

        #[inline]
        pub fn kidle() -> ! {
            halt::idle::<Platform>()
        }

        #[inline]
        pub fn ktrap(diagnostic: Diagnostic) -> ! {
            halt::trap::<Platform>(diagnostic)
        }
    }
}
