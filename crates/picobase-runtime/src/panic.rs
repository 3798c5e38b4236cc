use core::panic::PanicInfo;

use foundation::{kfn, Diagnostic};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    debug::writeln!("[HALT] panic: {}", info);
    kfn::ktrap(Diagnostic::Panic)
}
