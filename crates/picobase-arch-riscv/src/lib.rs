//! RISC-V (Hazard3) backend of the platform intrinsics.

#![no_std]

pub mod delay;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod hazard3;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use hazard3::Hazard3;

#[cfg(all(
    any(target_arch = "riscv32", target_arch = "riscv64"),
    target_os = "none"
))]
picobase_macros::export_intrinsics!(Hazard3);
