use core::ptr::addr_of;

use foundation::{InitArray, InitFn};

extern "C" {
    static __preinit_array_start: InitFn;
    static __preinit_array_end: InitFn;
}

/// Default system bring-up: every `.preinit_array` entry in storage order.
#[no_mangle]
pub extern "C" fn runtime_run_initializers() {
    unsafe {
        let preinit = InitArray::from_bounds(
            addr_of!(__preinit_array_start),
            addr_of!(__preinit_array_end),
        );
        debug::writeln!("[BOOT] preinit_array: {} entries", preinit.len());
        preinit.run();
    }
}
