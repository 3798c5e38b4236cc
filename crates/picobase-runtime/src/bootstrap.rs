use foundation::InitArray;

/// Runs `preinit` to completion, then every entry of `init` in storage order.
///
/// # Safety
/// `init` must describe a valid initializer array (see
/// [`InitArray::from_bounds`]) whose entries are sound to call now.
pub unsafe fn run_phases<P: FnOnce()>(preinit: P, init: &InitArray) {
    debug::writeln!("[BOOT] preinit");
    preinit();

    debug::writeln!("[BOOT] init_array: {} entries", init.len());
    unsafe { init.run() };

    debug::writeln!("[BOOT] runtime_init done");
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "none")] {
        use core::ptr::addr_of;
        use foundation::InitFn;

        extern "C" {
            fn runtime_run_initializers();

            static __init_array_start: InitFn;
            static __init_array_end: InitFn;
        }

        /// Called once from the reset path, before `main`.
        #[no_mangle]
        pub extern "C" fn runtime_init() {
            // Bounds come from the linker script and delimit `.init_array`.
            unsafe {
                let init = InitArray::from_bounds(
                    addr_of!(__init_array_start),
                    addr_of!(__init_array_end),
                );
                run_phases(|| runtime_run_initializers(), &init);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use foundation::InitFn;
    use std::sync::{Mutex, MutexGuard};
    use std::vec::Vec;

    static LOG: Mutex<Vec<u8>> = Mutex::new(Vec::new());
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        LOG.lock().unwrap().clear();
        guard
    }

    fn record(id: u8) {
        LOG.lock().unwrap().push(id);
    }

    fn log() -> Vec<u8> {
        LOG.lock().unwrap().clone()
    }

    unsafe extern "C" fn probe_a() {
        record(b'a');
    }

    unsafe extern "C" fn probe_b() {
        record(b'b');
    }

    unsafe extern "C" fn probe_c() {
        record(b'c');
    }

    static PROBES: [InitFn; 3] = [probe_a, probe_b, probe_c];
    static SHUFFLED: [InitFn; 4] = [probe_c, probe_a, probe_c, probe_b];

    #[test]
    fn init_entries_run_in_storage_order() {
        let _g = serial();
        unsafe { run_phases(|| {}, &InitArray::from_slice(&PROBES)) };
        assert_eq!(log(), b"abc");
    }

    #[test]
    fn order_follows_storage_not_identity() {
        let _g = serial();
        unsafe { run_phases(|| {}, &InitArray::from_slice(&SHUFFLED)) };
        assert_eq!(log(), b"cacb");
    }

    #[test]
    fn preinit_completes_before_first_init_entry() {
        let _g = serial();
        unsafe {
            run_phases(
                || {
                    assert!(log().is_empty());
                    record(b'p');
                    record(b'q');
                },
                &InitArray::from_slice(&PROBES),
            )
        };
        assert_eq!(log(), b"pqabc");
    }

    #[test]
    fn empty_init_array_still_runs_preinit() {
        let _g = serial();
        unsafe { run_phases(|| record(b'p'), &InitArray::from_slice(&PROBES[..0])) };
        assert_eq!(log(), b"p");
    }
}
