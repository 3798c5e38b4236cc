//! Debug trace sink.
//!
//! With the `debug` feature on, `writeln!` formats through `core::fmt` into
//! `__debug_write`, which the board support code must provide. With it off,
//! every call compiles away.

#![no_std]

use cfg_if::cfg_if;
use core::fmt;

cfg_if! {
    if #[cfg(feature = "debug")] {
        extern "C" {
            fn __debug_write(buf: *const u8, len: usize);
        }

        struct Sink;

        impl fmt::Write for Sink {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                unsafe { __debug_write(s.as_ptr(), s.len()) };
                Ok(())
            }
        }

        #[doc(hidden)]
        pub fn _write(args: fmt::Arguments<'_>) {
            let _ = fmt::Write::write_fmt(&mut Sink, args);
            let _ = fmt::Write::write_str(&mut Sink, "\n");
        }
    } else {
        #[doc(hidden)]
        #[inline(always)]
        pub fn _write(_args: fmt::Arguments<'_>) {}
    }
}

#[inline(always)]
pub const fn enabled() -> bool {
    cfg!(feature = "debug")
}

#[macro_export]
macro_rules! writeln {
    ($($arg:tt)*) => {
        $crate::_write(format_args!($($arg)*))
    };
}
