//! Contracts shared by every picobase layer.
//!
//! Nothing in here touches hardware directly. The architecture backends
//! implement [`Intrinsics`], the libc stubs halt through [`Halt`], and the
//! bootstrap walks [`InitArray`]s supplied by the linker.

#![no_std]

pub mod arch;
pub mod contract;
pub mod halt;
pub mod init;
pub mod irq;
pub mod kfn;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use arch::Intrinsics;
pub use halt::{Diagnostic, Halt, HaltKind};
pub use init::{InitArray, InitFn};
pub use irq::{Handler, HandlerSlots};
