//! Pre-main bootstrap.
//!
//! `runtime_init` brings the system up in two phases: the SDK's
//! `runtime_run_initializers` (clocks and hardware), then every entry of the
//! linker's `.init_array`. Neither phase can report failure; an initializer
//! that cannot continue halts on its own.

#![no_std]

pub mod bootstrap;
pub mod irq;

#[cfg(all(feature = "panic", target_os = "none"))]
mod panic;

#[cfg(all(feature = "preinit-array", target_os = "none"))]
mod preinit;

pub use bootstrap::run_phases;
pub use irq::IRQ_HANDLER_CHAIN_SLOT_COUNT;
