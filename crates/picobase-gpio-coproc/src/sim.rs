use core::cell::Cell;

use crate::encoding::{Bank, Half, Op};

/// Software model of the coprocessor register bank.
///
/// Carries the same operations as the hardware functions (as methods), so
/// code written against the instruction layer can be exercised on the host.
/// Input pins are driven with [`SimBank::drive_inputs`]; writes never touch
/// them.
#[derive(Default)]
pub struct SimBank {
    out: Cell<u64>,
    oe: Cell<u64>,
    input: Cell<u64>,
}

impl SimBank {
    pub const fn new() -> Self {
        Self {
            out: Cell::new(0),
            oe: Cell::new(0),
            input: Cell::new(0),
        }
    }

    pub fn drive_inputs(&self, levels: u64) {
        self.input.set(levels);
    }

    fn reg(&self, bank: Bank) -> &Cell<u64> {
        match bank {
            Bank::Out => &self.out,
            Bank::Oe => &self.oe,
            Bank::In => &self.input,
        }
    }

    /// Applies `op` to the lanes selected by `lanes`. For `Put` the lanes
    /// take `value`; the other ops treat `value` as a mask.
    fn apply(&self, bank: Bank, op: Op, lanes: u64, value: u64) {
        if bank == Bank::In {
            return;
        }
        let reg = self.reg(bank);
        let old = reg.get();
        let new = match op {
            Op::Put => (old & !lanes) | (value & lanes),
            Op::Xor => old ^ (value & lanes),
            Op::Set => old | (value & lanes),
            Op::Clr => old & !(value & lanes),
        };
        reg.set(new);
    }

    pub(crate) fn write_half(&self, bank: Bank, half: Half, op: Op, x: u32) {
        let shift = half_shift(half);
        self.apply(bank, op, 0xffff_ffff << shift, (x as u64) << shift);
    }

    pub(crate) fn write_full(&self, bank: Bank, op: Op, x: u64) {
        self.apply(bank, op, u64::MAX, x);
    }

    /// `Put` writes `val` into the pin; the other ops act only when `val`.
    pub(crate) fn write_bit(&self, bank: Bank, op: Op, pin: u32, val: bool) {
        let bit = 1u64 << (pin & 63);
        match op {
            Op::Put => self.apply(bank, op, bit, if val { bit } else { 0 }),
            _ if val => self.apply(bank, op, bit, bit),
            _ => {}
        }
    }

    /// Index 0 is the lo register, 1 the hi one; other indices are ignored.
    pub(crate) fn write_index(&self, bank: Bank, op: Op, reg_index: u32, mask: u32) {
        let half = match reg_index {
            0 => Half::Lo,
            1 => Half::Hi,
            _ => return,
        };
        self.write_half(bank, half, op, mask);
    }

    pub(crate) fn read_half(&self, bank: Bank, half: Half) -> u32 {
        (self.read_full(bank) >> half_shift(half)) as u32
    }

    pub(crate) fn read_full(&self, bank: Bank) -> u64 {
        self.reg(bank).get()
    }
}

#[inline]
fn half_shift(half: Half) -> u32 {
    match half {
        Half::Lo => 0,
        Half::Hi => 32,
    }
}
