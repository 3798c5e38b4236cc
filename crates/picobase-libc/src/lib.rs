//! Minimal C library interface for freestanding builds.
//!
//! No heap, no console, no unwinding. Allocation and contract violations
//! trap-halt, `exit` idle-halts, output is discarded. The exported symbols
//! only exist for `target_os = "none"`; on a hosted target the functions are
//! ordinary Rust items so they can be tested next to the host libc.

#![no_std]
// Keeps LLVM from lowering the byte loops below back into calls to
// `memcpy`/`memset` and recursing.
#![no_builtins]

pub mod heap;
pub mod overrides;
pub mod process;
pub mod stdio;
pub mod stdlib;
pub mod string;
