//! Opcode and register-selector table.
//!
//! `opc1` selects the operation, `CRm` the register. 64-bit transfers use
//! the lo `CRm` and carry the hi half in the second transfer register.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Put = 0,
    Xor = 1,
    Set = 2,
    Clr = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bank {
    /// Output value.
    Out,
    /// Output enable.
    Oe,
    /// Input value (read only).
    In,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Lo,
    Hi,
}

pub const COPROCESSOR: u8 = 0;

/// `opc1` of every read.
pub const GET_OPC1: u8 = 0;

#[inline]
pub const fn crm(bank: Bank, half: Half) -> u8 {
    let base = match bank {
        Bank::Out => 0,
        Bank::Oe => 4,
        Bank::In => 8,
    };
    match half {
        Half::Lo => base,
        Half::Hi => base + 1,
    }
}

/// `opc1` of 32- and 64-bit mask writes.
#[inline]
pub const fn mask_opc1(op: Op) -> u8 {
    op as u8
}

/// `opc1` of single-bit writes.
#[inline]
pub const fn bit_opc1(op: Op) -> u8 {
    4 + op as u8
}

/// `opc1` of indexed mask writes.
#[inline]
pub const fn index_opc1(op: Op) -> u8 {
    8 + op as u8
}
