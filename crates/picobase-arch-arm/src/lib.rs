//! Thumb backend of the platform intrinsics.
//!
//! The `asm!` bodies only exist when compiling for `target_arch = "arm"`;
//! the decode and timing helpers they rely on build everywhere so they can
//! be tested on the host.

#![no_std]

pub mod cpu;
pub mod delay;

#[cfg(target_arch = "arm")]
mod thumb;

#[cfg(target_arch = "arm")]
pub use thumb::Thumb;

#[cfg(all(target_arch = "arm", target_os = "none"))]
picobase_macros::export_intrinsics!(Thumb, aeabi);
