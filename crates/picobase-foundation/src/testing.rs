//! Halt implementation for host test suites.

use crate::halt::{Diagnostic, Halt};

/// Panics instead of looping, so `#[should_panic]` can observe which halt
/// was entered. Messages are `"idle-halt"` and `"trap-halt: <diagnostic>"`.
pub struct PanicHalt;

impl Halt for PanicHalt {
    fn idle_halt() -> ! {
        panic!("idle-halt")
    }

    fn trap_halt(diagnostic: Diagnostic) -> ! {
        panic!("trap-halt: {}", diagnostic)
    }
}
