use crate::encoding::{self, Bank, Half, Op};
use crate::SimBank;

const OPS: [Op; 4] = [Op::Put, Op::Xor, Op::Set, Op::Clr];

#[test]
fn register_selectors() {
    assert_eq!(encoding::crm(Bank::Out, Half::Lo), 0);
    assert_eq!(encoding::crm(Bank::Out, Half::Hi), 1);
    assert_eq!(encoding::crm(Bank::Oe, Half::Lo), 4);
    assert_eq!(encoding::crm(Bank::Oe, Half::Hi), 5);
    assert_eq!(encoding::crm(Bank::In, Half::Lo), 8);
    assert_eq!(encoding::crm(Bank::In, Half::Hi), 9);
}

#[test]
fn opcode_groups_do_not_overlap() {
    for (i, op) in OPS.into_iter().enumerate() {
        assert_eq!(encoding::mask_opc1(op), i as u8);
        assert_eq!(encoding::bit_opc1(op), 4 + i as u8);
        assert_eq!(encoding::index_opc1(op), 8 + i as u8);
    }
    // mcr/mcrr opc1 fields are four bits wide.
    assert!(encoding::index_opc1(Op::Clr) <= 0xf);
    assert_eq!(encoding::GET_OPC1, encoding::mask_opc1(Op::Put));
}

#[test]
fn set_pin_5_leaves_other_outputs_alone() {
    let bank = SimBank::new();
    let prior = 0xdead_beef_0000_0f0f_u64;
    bank.hilo_out_put(prior);

    bank.bit_out_set(5);

    let after = bank.hilo_out_get();
    assert_ne!(after & (1 << 5), 0);
    assert_eq!(after & !(1 << 5), prior & !(1 << 5));
}

#[test]
fn half_writes_only_touch_their_half() {
    let bank = SimBank::new();
    bank.hilo_out_put(0x1111_2222_3333_4444);

    bank.lo_out_put(0xaaaa_aaaa);
    assert_eq!(bank.hilo_out_get(), 0x1111_2222_aaaa_aaaa);

    bank.hi_out_clr(0x1111_0000);
    assert_eq!(bank.hi_out_get(), 0x0000_2222);
    assert_eq!(bank.lo_out_get(), 0xaaaa_aaaa);

    bank.hi_out_xor(0xffff_ffff);
    assert_eq!(bank.hi_out_get(), 0xffff_dddd);

    bank.lo_out_set(0x5555_5555);
    assert_eq!(bank.lo_out_get(), 0xffff_ffff);
}

#[test]
fn full_width_ops() {
    let bank = SimBank::new();
    bank.hilo_oe_set(0x8000_0000_0000_0001);
    bank.hilo_oe_xor(0x0000_0000_0000_0003);
    assert_eq!(bank.hilo_oe_get(), 0x8000_0000_0000_0002);
    bank.hilo_oe_clr(u64::MAX);
    assert_eq!(bank.hilo_oe_get(), 0);
    assert_eq!(bank.lo_oe_get(), 0);
    assert_eq!(bank.hi_oe_get(), 0);
}

#[test]
fn bit_ops_match_mask_ops() {
    for pin in [0u32, 5, 31, 32, 47, 63] {
        let by_bit = SimBank::new();
        let by_mask = SimBank::new();
        by_bit.hilo_out_put(0x0123_4567_89ab_cdef);
        by_mask.hilo_out_put(0x0123_4567_89ab_cdef);

        by_bit.bit_out_xor(pin);
        by_mask.hilo_out_xor(1 << pin);
        assert_eq!(by_bit.hilo_out_get(), by_mask.hilo_out_get(), "xor pin {pin}");

        by_bit.bit_out_clr(pin);
        by_mask.hilo_out_clr(1 << pin);
        assert_eq!(by_bit.hilo_out_get(), by_mask.hilo_out_get(), "clr pin {pin}");

        by_bit.bit_out_set(pin);
        by_mask.hilo_out_set(1 << pin);
        assert_eq!(by_bit.hilo_out_get(), by_mask.hilo_out_get(), "set pin {pin}");
    }
}

#[test]
fn bit_put_writes_value() {
    let bank = SimBank::new();
    bank.bit_oe_put(40, true);
    assert_eq!(bank.hilo_oe_get(), 1 << 40);
    bank.bit_oe_put(40, false);
    assert_eq!(bank.hilo_oe_get(), 0);
}

#[test]
fn conditional_bit_ops_need_value() {
    let bank = SimBank::new();
    bank.bit_out_set2(3, false);
    assert_eq!(bank.lo_out_get(), 0);
    bank.bit_out_set2(3, true);
    assert_eq!(bank.lo_out_get(), 1 << 3);
    bank.bit_out_xor2(3, false);
    assert_eq!(bank.lo_out_get(), 1 << 3);
    bank.bit_out_xor2(3, true);
    assert_eq!(bank.lo_out_get(), 0);
    bank.bit_out_set(3);
    bank.bit_out_clr2(3, false);
    assert_eq!(bank.lo_out_get(), 1 << 3);
    bank.bit_out_clr2(3, true);
    assert_eq!(bank.lo_out_get(), 0);
}

#[test]
fn indexed_writes_select_half() {
    let bank = SimBank::new();
    bank.index_out_put(1, 0xcafe_f00d);
    assert_eq!(bank.hilo_out_get(), 0xcafe_f00d_0000_0000);
    bank.index_out_set(0, 0x0000_00ff);
    bank.index_out_clr(1, 0x0000_f00d);
    bank.index_out_xor(0, 0x0000_0101);
    assert_eq!(bank.hilo_out_get(), 0xcafe_0000_0000_01fe);

    bank.index_oe_put(0, 0x1);
    bank.index_oe_set(1, 0x1);
    bank.index_oe_xor(1, 0x3);
    bank.index_oe_clr(0, 0x1);
    assert_eq!(bank.hilo_oe_get(), 0x0000_0002_0000_0000);
}

#[test]
fn unknown_index_is_ignored_by_model() {
    let bank = SimBank::new();
    bank.index_out_put(2, u32::MAX);
    bank.index_out_set(7, u32::MAX);
    assert_eq!(bank.hilo_out_get(), 0);
}

#[test]
fn inputs_are_read_only() {
    let bank = SimBank::new();
    bank.drive_inputs(0xffff_0000_0000_ffff);
    bank.hilo_out_put(0);
    bank.hilo_oe_put(u64::MAX);
    assert_eq!(bank.hilo_in_get(), 0xffff_0000_0000_ffff);
    assert_eq!(bank.lo_in_get(), 0x0000_ffff);
    assert_eq!(bank.hi_in_get(), 0xffff_0000);
}

#[test]
fn output_and_enable_are_independent() {
    let bank = SimBank::new();
    bank.lo_oe_put(0xf0);
    bank.lo_out_put(0x0f);
    bank.hi_oe_set(1);
    assert_eq!(bank.lo_oe_get(), 0xf0);
    assert_eq!(bank.hi_oe_get(), 1);
    assert_eq!(bank.lo_out_get(), 0x0f);
    assert_eq!(bank.hi_out_get(), 0);
}
