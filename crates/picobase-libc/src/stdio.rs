//! Output sinks. There is no console: everything written is discarded and
//! reported as written.

use core::ffi::{c_char, c_int, c_void};

/// Discards `s` and reports success.
#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn puts(_s: *const c_char) -> c_int {
    0
}

/// Discards `c` and returns it, as a successful `putchar` does.
#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn putchar(c: c_int) -> c_int {
    c
}

/// The format string and argument list are never read, so no argument
/// count or type can cause a fault. Reports zero characters written.
#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn vprintf(_format: *const c_char, _ap: *mut c_void) -> c_int {
    0
}

/// Reports the whole buffer as written for any descriptor.
#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn write(_fd: c_int, _buf: *const c_void, count: usize) -> isize {
    count as isize
}
