#![no_std]

/// Fails the build unless exactly one of the listed cargo features of the
/// invoking crate is enabled.
#[macro_export]
macro_rules! require_exactly_one_feature {
    ($($feature:literal),+ $(,)?) => {
        #[cfg(not(any($(feature = $feature),+)))]
        compile_error!(concat!(
            "exactly one of these features must be enabled:",
            $(" `", $feature, "`"),+
        ));
        $crate::require_at_most_one_feature!($($feature),+);
    };
}

/// Fails the build if two of the listed cargo features are enabled together.
#[macro_export]
macro_rules! require_at_most_one_feature {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        $(
            #[cfg(all(feature = $first, feature = $rest))]
            compile_error!(concat!(
                "features `", $first, "` and `", $rest, "` are mutually exclusive"
            ));
        )*
        $crate::require_at_most_one_feature!($($rest),*);
    };
    () => {};
}

/// Exports a `foundation::Intrinsics` implementation as the C symbol set.
///
/// Each symbol forwards to the trait method, so code linked across the C
/// boundary runs the same body as inline Rust callers. The divide-by-zero
/// fixups are only exported when the invocation names them, since only the
/// Arm EABI routes integer division errors through them.
#[macro_export]
macro_rules! export_intrinsics {
    (@common $backend:ty) => {
        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __compiler_memory_barrier() {
            <$backend as foundation::Intrinsics>::compiler_memory_barrier()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __nop() {
            <$backend as foundation::Intrinsics>::nop()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __sev() {
            <$backend as foundation::Intrinsics>::sev()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __wfe() {
            <$backend as foundation::Intrinsics>::wfe()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __wfi() {
            <$backend as foundation::Intrinsics>::wfi()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __dmb() {
            <$backend as foundation::Intrinsics>::dmb()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __dsb() {
            <$backend as foundation::Intrinsics>::dsb()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __isb() {
            <$backend as foundation::Intrinsics>::isb()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn __breakpoint() {
            <$backend as foundation::Intrinsics>::breakpoint()
        }

        #[no_mangle]
        pub extern "C" fn __get_current_exception() -> u32 {
            <$backend as foundation::Intrinsics>::current_exception()
        }

        #[no_mangle]
        pub extern "C" fn pico_processor_state_is_nonsecure() -> bool {
            <$backend as foundation::Intrinsics>::processor_state_is_nonsecure()
        }

        #[no_mangle]
        #[inline(never)]
        pub extern "C" fn busy_wait_at_least_cycles(minimum_cycles: u32) {
            <$backend as foundation::Intrinsics>::busy_wait_at_least_cycles(minimum_cycles)
        }

        #[no_mangle]
        pub extern "C" fn __mul_instruction(a: i32, b: i32) -> i32 {
            <$backend as foundation::Intrinsics>::mul_instruction(a, b)
        }
    };
    ($backend:ty, aeabi) => {
        $crate::export_intrinsics!(@common $backend);

        #[no_mangle]
        pub extern "C" fn __aeabi_idiv0(dividend: i32) -> i32 {
            <$backend as foundation::Intrinsics>::idiv0(dividend)
        }

        #[no_mangle]
        pub extern "C" fn __aeabi_ldiv0(dividend: i64) -> i64 {
            <$backend as foundation::Intrinsics>::ldiv0(dividend)
        }
    };
    ($backend:ty) => {
        $crate::export_intrinsics!(@common $backend);
    };
}
