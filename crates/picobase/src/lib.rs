//! picobase: the freestanding runtime floor of a Pico SDK image.
//!
//! Enabling a feature links the matching layer; every C symbol it defines
//! comes with it. Architecture and chip are chosen here, once, at build
//! time. See `foundation::contract` for the full symbol table per profile.

#![no_std]

pub use debug;
pub use foundation;
pub use runtime;

#[cfg(feature = "arch-arm")]
pub use arch_arm;

#[cfg(feature = "arch-riscv")]
pub use arch_riscv;

#[cfg(any(feature = "gpio-coproc", feature = "sim"))]
pub use gpio_coproc;

#[cfg(feature = "libc-minimal")]
pub use libc_minimal as libc;

use foundation::contract::{Arch, Chip, Profile};

#[cfg(target_os = "none")]
mod guards {
    picobase_macros::require_exactly_one_feature!("arch-arm", "arch-riscv");
    picobase_macros::require_exactly_one_feature!("rp2040", "rp2350");

    #[cfg(all(feature = "arch-riscv", not(feature = "rp2350")))]
    compile_error!("`arch-riscv` requires `rp2350`: RP2040 has no RISC-V cores");

    #[cfg(all(
        feature = "gpio-coproc",
        not(all(feature = "arch-arm", feature = "rp2350"))
    ))]
    compile_error!("`gpio-coproc` requires `arch-arm` and `rp2350`");
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "arch-arm", target_arch = "arm"))] {
        /// The intrinsics backend linked into this build.
        pub type Backend = arch_arm::Thumb;
    } else if #[cfg(all(
        feature = "arch-riscv",
        any(target_arch = "riscv32", target_arch = "riscv64")
    ))] {
        /// The intrinsics backend linked into this build.
        pub type Backend = arch_riscv::Hazard3;
    }
}

/// The symbol profile the enabled features describe.
pub const PROFILE: Profile = Profile {
    arch: if cfg!(feature = "arch-riscv") {
        Arch::Riscv
    } else {
        Arch::Arm
    },
    chip: if cfg!(feature = "rp2350") {
        Chip::Rp2350
    } else {
        Chip::Rp2040
    },
    libc: cfg!(feature = "libc-minimal"),
    runtime: true,
    gpio_coproc: cfg!(feature = "gpio-coproc"),
};

#[cfg(target_os = "none")]
const _: () = assert!(PROFILE.validate().is_ok(), "unsupported picobase profile");
