//! Terminal execution modes.
//!
//! Idle-halt means "finished": the core sleeps in a wait-for-interrupt loop.
//! Trap-halt means "an invariant broke": the core sits on a breakpoint and
//! the cause is left in `picobase_last_diagnostic` for a probe to read.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltKind {
    Idle,
    Trap,
}

/// Why the core entered trap-halt.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    None = 0,
    Malloc = 1,
    Calloc = 2,
    Realloc = 3,
    Free = 4,
    Assert = 5,
    Abort = 6,
    Panic = 7,
}

impl Diagnostic {
    pub const ALL: [Diagnostic; 8] = [
        Diagnostic::None,
        Diagnostic::Malloc,
        Diagnostic::Calloc,
        Diagnostic::Realloc,
        Diagnostic::Free,
        Diagnostic::Assert,
        Diagnostic::Abort,
        Diagnostic::Panic,
    ];

    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Diagnostic::None),
            1 => Some(Diagnostic::Malloc),
            2 => Some(Diagnostic::Calloc),
            3 => Some(Diagnostic::Realloc),
            4 => Some(Diagnostic::Free),
            5 => Some(Diagnostic::Assert),
            6 => Some(Diagnostic::Abort),
            7 => Some(Diagnostic::Panic),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Diagnostic::None => "none",
            Diagnostic::Malloc => "malloc",
            Diagnostic::Calloc => "calloc",
            Diagnostic::Realloc => "realloc",
            Diagnostic::Free => "free",
            Diagnostic::Assert => "assert",
            Diagnostic::Abort => "abort",
            Diagnostic::Panic => "panic",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seam between stub logic and the hardware halt loops.
pub trait Halt {
    fn idle_halt() -> !;
    fn trap_halt(diagnostic: Diagnostic) -> !;
}

/// Code of the most recent trap-halt cause. Read by a debugger once the core
/// stops on its breakpoint.
#[cfg_attr(target_os = "none", export_name = "picobase_last_diagnostic")]
pub static LAST_DIAGNOSTIC: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn record(diagnostic: Diagnostic) {
    LAST_DIAGNOSTIC.store(diagnostic.code(), Ordering::SeqCst);
}

pub fn last_diagnostic() -> Diagnostic {
    Diagnostic::from_code(LAST_DIAGNOSTIC.load(Ordering::SeqCst)).unwrap_or(Diagnostic::None)
}

pub fn idle<H: Halt>() -> ! {
    debug::writeln!("[HALT] idle");
    H::idle_halt()
}

pub fn trap<H: Halt>(diagnostic: Diagnostic) -> ! {
    record(diagnostic);
    debug::writeln!("[HALT] trap: {}", diagnostic);
    H::trap_halt(diagnostic)
}
