//! RP2350 GPIO coprocessor (`p0`) instructions.
//!
//! Every write is a single `mcr`/`mcrr` and every read a single
//! `mrc`/`mrrc`, so one call never races with an interrupt. Nothing is
//! masked or validated in software: out-of-range pins and register indices
//! behave however the hardware behaves.
//!
//! The instruction functions exist only when building for an Arm core with
//! the `rp2350` feature. Elsewhere the crate exposes just the encoding table
//! (and the [`SimBank`] model with the `sim` feature).

#![no_std]

pub mod encoding;

mod ops;

#[cfg(any(test, feature = "sim"))]
mod sim;

#[cfg(all(target_arch = "arm", feature = "rp2350"))]
pub use ops::*;

#[cfg(any(test, feature = "sim"))]
pub use sim::SimBank;

#[cfg(test)]
mod tests;
