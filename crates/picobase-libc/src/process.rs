//! Process termination and assertion failure.
//!
//! `exit`/`_exit` are the normal end of the program and idle-halt; the
//! status is ignored since nothing is left to receive it. Assertion
//! failures and `abort` trap-halt without looking at their arguments.

use core::ffi::{c_char, c_int};

use foundation::halt::{self, Diagnostic, Halt};

pub fn exit_with<H: Halt>(_status: c_int) -> ! {
    halt::idle::<H>()
}

pub fn abort_with<H: Halt>() -> ! {
    halt::trap::<H>(Diagnostic::Abort)
}

pub fn assert_failed_with<H: Halt>() -> ! {
    halt::trap::<H>(Diagnostic::Assert)
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "none")] {
        use foundation::kfn::Platform;

        #[no_mangle]
        pub extern "C" fn _exit(status: c_int) -> ! {
            exit_with::<Platform>(status)
        }

        #[no_mangle]
        pub extern "C" fn exit(status: c_int) -> ! {
            _exit(status)
        }

        #[no_mangle]
        pub extern "C" fn abort() -> ! {
            abort_with::<Platform>()
        }

        /// newlib/picolibc spelling.
        #[no_mangle]
        pub extern "C" fn __assert_func(
            _file: *const c_char,
            _line: c_int,
            _func: *const c_char,
            _failedexpr: *const c_char,
        ) -> ! {
            assert_failed_with::<Platform>()
        }

        /// glibc/musl-style spelling.
        #[no_mangle]
        pub extern "C" fn __assert_fail(
            _expr: *const c_char,
            _file: *const c_char,
            _line: c_int,
        ) -> ! {
            assert_failed_with::<Platform>()
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::String;
    use foundation::testing::PanicHalt;

    #[test]
    #[should_panic(expected = "idle-halt")]
    fn exit_idles() {
        exit_with::<PanicHalt>(0);
    }

    #[test]
    fn exit_never_traps_whatever_the_status() {
        for status in [0, 1, -1, c_int::MAX] {
            let err = std::panic::catch_unwind(|| exit_with::<PanicHalt>(status)).unwrap_err();
            let msg = err
                .downcast_ref::<&str>()
                .map(|s| String::from(*s))
                .or_else(|| err.downcast_ref::<String>().cloned())
                .unwrap_or_default();
            assert_eq!(msg, "idle-halt");
        }
    }

    #[test]
    #[should_panic(expected = "trap-halt: abort")]
    fn abort_traps() {
        abort_with::<PanicHalt>();
    }

    #[test]
    #[should_panic(expected = "trap-halt: assert")]
    fn assertion_failure_traps() {
        assert_failed_with::<PanicHalt>();
    }
}
