//! Instruction table.
//!
//! Each `gpioc!` line is the single definition of one operation. It expands
//! to the inline Rust function issuing the instruction, the exported
//! `gpioc_*` C symbol forwarding to it, and the matching [`SimBank`] method.
//!
//! [`SimBank`]: crate::SimBank

#![allow(unused_imports)]

#[cfg(all(target_arch = "arm", feature = "rp2350"))]
use core::arch::asm;

use crate::encoding::{self, Bank, Half, Op};

macro_rules! hw {
    ($($item:item)*) => {
        $(
            #[cfg(all(target_arch = "arm", feature = "rp2350"))]
            $item
        )*
    };
}

macro_rules! export {
    (fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)?) => {
        paste::paste! {
            #[cfg(all(target_arch = "arm", feature = "rp2350", target_os = "none"))]
            #[no_mangle]
            pub extern "C" fn [<gpioc_ $name>]($($arg: $ty),*) $(-> $ret)? {
                $name($($arg),*)
            }
        }
    };
}

macro_rules! sim {
    ($($item:item)*) => {
        #[cfg(any(test, feature = "sim"))]
        impl crate::sim::SimBank {
            $($item)*
        }
    };
}

macro_rules! gpioc {
    ($(#[$doc:meta])* mask32 $name:ident: $op:ident $bank:ident $half:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(x: u32) {
                unsafe {
                    asm!(
                        "mcr p0, #{opc1}, {x}, c0, c{crm}",
                        x = in(reg) x,
                        opc1 = const encoding::mask_opc1(Op::$op),
                        crm = const encoding::crm(Bank::$bank, Half::$half),
                        options(nomem, nostack, preserves_flags),
                    )
                }
            }
        }
        export!(fn $name(x: u32));
        sim! {
            $(#[$doc])*
            pub fn $name(&self, x: u32) {
                self.write_half(Bank::$bank, Half::$half, Op::$op, x)
            }
        }
    };
    ($(#[$doc:meta])* mask64 $name:ident: $op:ident $bank:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(x: u64) {
                unsafe {
                    asm!(
                        "mcrr p0, #{opc1}, {lo}, {hi}, c{crm}",
                        lo = in(reg) x as u32,
                        hi = in(reg) (x >> 32) as u32,
                        opc1 = const encoding::mask_opc1(Op::$op),
                        crm = const encoding::crm(Bank::$bank, Half::Lo),
                        options(nomem, nostack, preserves_flags),
                    )
                }
            }
        }
        export!(fn $name(x: u64));
        sim! {
            $(#[$doc])*
            pub fn $name(&self, x: u64) {
                self.write_full(Bank::$bank, Op::$op, x)
            }
        }
    };
    ($(#[$doc:meta])* bit $name:ident: $op:ident $bank:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(pin: u32) {
                unsafe {
                    asm!(
                        "mcr p0, #{opc1}, {pin}, c0, c{crm}",
                        pin = in(reg) pin,
                        opc1 = const encoding::bit_opc1(Op::$op),
                        crm = const encoding::crm(Bank::$bank, Half::Lo),
                        options(nomem, nostack, preserves_flags),
                    )
                }
            }
        }
        export!(fn $name(pin: u32));
        sim! {
            $(#[$doc])*
            pub fn $name(&self, pin: u32) {
                self.write_bit(Bank::$bank, Op::$op, pin, true)
            }
        }
    };
    ($(#[$doc:meta])* bit_val $name:ident: $op:ident $bank:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(pin: u32, val: bool) {
                unsafe {
                    asm!(
                        "mcrr p0, #{opc1}, {pin}, {val}, c{crm}",
                        pin = in(reg) pin,
                        val = in(reg) val as u32,
                        opc1 = const encoding::bit_opc1(Op::$op),
                        crm = const encoding::crm(Bank::$bank, Half::Lo),
                        options(nomem, nostack, preserves_flags),
                    )
                }
            }
        }
        export!(fn $name(pin: u32, val: bool));
        sim! {
            $(#[$doc])*
            pub fn $name(&self, pin: u32, val: bool) {
                self.write_bit(Bank::$bank, Op::$op, pin, val)
            }
        }
    };
    ($(#[$doc:meta])* index $name:ident: $op:ident $bank:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(reg_index: u32, mask: u32) {
                unsafe {
                    asm!(
                        "mcrr p0, #{opc1}, {mask}, {index}, c{crm}",
                        mask = in(reg) mask,
                        index = in(reg) reg_index,
                        opc1 = const encoding::index_opc1(Op::$op),
                        crm = const encoding::crm(Bank::$bank, Half::Lo),
                        options(nomem, nostack, preserves_flags),
                    )
                }
            }
        }
        export!(fn $name(reg_index: u32, mask: u32));
        sim! {
            $(#[$doc])*
            pub fn $name(&self, reg_index: u32, mask: u32) {
                self.write_index(Bank::$bank, Op::$op, reg_index, mask)
            }
        }
    };
    ($(#[$doc:meta])* get32 $name:ident: $bank:ident $half:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name() -> u32 {
                let x: u32;
                unsafe {
                    asm!(
                        "mrc p0, #{opc1}, {x}, c0, c{crm}",
                        x = out(reg) x,
                        opc1 = const encoding::GET_OPC1,
                        crm = const encoding::crm(Bank::$bank, Half::$half),
                        options(nomem, nostack, preserves_flags),
                    )
                };
                x
            }
        }
        export!(fn $name() -> u32);
        sim! {
            $(#[$doc])*
            pub fn $name(&self) -> u32 {
                self.read_half(Bank::$bank, Half::$half)
            }
        }
    };
    ($(#[$doc:meta])* get64 $name:ident: $bank:ident) => {
        hw! {
            $(#[$doc])*
            #[inline(always)]
            pub fn $name() -> u64 {
                let lo: u32;
                let hi: u32;
                unsafe {
                    asm!(
                        "mrrc p0, #{opc1}, {lo}, {hi}, c{crm}",
                        lo = out(reg) lo,
                        hi = out(reg) hi,
                        opc1 = const encoding::GET_OPC1,
                        crm = const encoding::crm(Bank::$bank, Half::Lo),
                        options(nomem, nostack, preserves_flags),
                    )
                };
                ((hi as u64) << 32) | lo as u64
            }
        }
        export!(fn $name() -> u64);
        sim! {
            $(#[$doc])*
            pub fn $name(&self) -> u64 {
                self.read_full(Bank::$bank)
            }
        }
    };
}

// Output value, 32/64-bit masks.
gpioc!(/// Writes GPIO 0..31 outputs.
    mask32 lo_out_put: Put Out Lo);
gpioc!(/// Toggles GPIO 0..31 outputs selected by the mask.
    mask32 lo_out_xor: Xor Out Lo);
gpioc!(/// Drives high GPIO 0..31 outputs selected by the mask.
    mask32 lo_out_set: Set Out Lo);
gpioc!(/// Drives low GPIO 0..31 outputs selected by the mask.
    mask32 lo_out_clr: Clr Out Lo);
gpioc!(/// Writes GPIO 32..63 outputs.
    mask32 hi_out_put: Put Out Hi);
gpioc!(mask32 hi_out_xor: Xor Out Hi);
gpioc!(mask32 hi_out_set: Set Out Hi);
gpioc!(mask32 hi_out_clr: Clr Out Hi);
gpioc!(/// Writes all 64 outputs in one transfer.
    mask64 hilo_out_put: Put Out);
gpioc!(mask64 hilo_out_xor: Xor Out);
gpioc!(mask64 hilo_out_set: Set Out);
gpioc!(mask64 hilo_out_clr: Clr Out);

// Output enable, 32/64-bit masks.
gpioc!(/// Writes GPIO 0..31 output enables.
    mask32 lo_oe_put: Put Oe Lo);
gpioc!(mask32 lo_oe_xor: Xor Oe Lo);
gpioc!(mask32 lo_oe_set: Set Oe Lo);
gpioc!(mask32 lo_oe_clr: Clr Oe Lo);
gpioc!(mask32 hi_oe_put: Put Oe Hi);
gpioc!(mask32 hi_oe_xor: Xor Oe Hi);
gpioc!(mask32 hi_oe_set: Set Oe Hi);
gpioc!(mask32 hi_oe_clr: Clr Oe Hi);
gpioc!(mask64 hilo_oe_put: Put Oe);
gpioc!(mask64 hilo_oe_xor: Xor Oe);
gpioc!(mask64 hilo_oe_set: Set Oe);
gpioc!(mask64 hilo_oe_clr: Clr Oe);

// Single bit. `put` transfers the value as a second register; the `*2`
// variants act only when `val` is true.
gpioc!(/// Writes one output.
    bit_val bit_out_put: Put Out);
gpioc!(/// Toggles one output.
    bit bit_out_xor: Xor Out);
gpioc!(/// Drives one output high.
    bit bit_out_set: Set Out);
gpioc!(/// Drives one output low.
    bit bit_out_clr: Clr Out);
gpioc!(/// Toggles one output if `val`.
    bit_val bit_out_xor2: Xor Out);
gpioc!(/// Drives one output high if `val`.
    bit_val bit_out_set2: Set Out);
gpioc!(/// Drives one output low if `val`.
    bit_val bit_out_clr2: Clr Out);
gpioc!(bit_val bit_oe_put: Put Oe);
gpioc!(bit bit_oe_xor: Xor Oe);
gpioc!(bit bit_oe_set: Set Oe);
gpioc!(bit bit_oe_clr: Clr Oe);
gpioc!(bit_val bit_oe_xor2: Xor Oe);
gpioc!(bit_val bit_oe_set2: Set Oe);
gpioc!(bit_val bit_oe_clr2: Clr Oe);

// Indexed masks: `reg_index` picks the 32-bit register.
gpioc!(index index_out_put: Put Out);
gpioc!(index index_out_xor: Xor Out);
gpioc!(index index_out_set: Set Out);
gpioc!(index index_out_clr: Clr Out);
gpioc!(index index_oe_put: Put Oe);
gpioc!(index index_oe_xor: Xor Oe);
gpioc!(index index_oe_set: Set Oe);
gpioc!(index index_oe_clr: Clr Oe);

// Reads.
gpioc!(get32 lo_out_get: Out Lo);
gpioc!(get32 hi_out_get: Out Hi);
gpioc!(get64 hilo_out_get: Out);
gpioc!(get32 lo_oe_get: Oe Lo);
gpioc!(get32 hi_oe_get: Oe Hi);
gpioc!(get64 hilo_oe_get: Oe);
gpioc!(/// Samples GPIO 0..31 inputs.
    get32 lo_in_get: In Lo);
gpioc!(get32 hi_in_get: In Hi);
gpioc!(/// Samples all 64 inputs in one transfer.
    get64 hilo_in_get: In);
