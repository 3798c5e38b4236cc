//! Exported-symbol contract.
//!
//! Every C symbol a build is expected to define, tagged with the layer that
//! owns it and the builds it applies to. Both intrinsics backends are checked
//! against the same table (see `xtask symbols`).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Intrinsics,
    Libc,
    Runtime,
    GpioCoproc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arch {
    Arm,
    Riscv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chip {
    Rp2040,
    Rp2350,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Data,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Always,
    Arm,
    Rp2350Arm,
}

impl Availability {
    pub const fn applies(self, arch: Arch, chip: Chip) -> bool {
        match self {
            Availability::Always => true,
            Availability::Arm => matches!(arch, Arch::Arm),
            Availability::Rp2350Arm => matches!((arch, chip), (Arch::Arm, Chip::Rp2350)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: &'static str,
    pub kind: SymbolKind,
    pub layer: Layer,
    pub availability: Availability,
}

const fn func(name: &'static str, layer: Layer, availability: Availability) -> Symbol {
    Symbol {
        name,
        kind: SymbolKind::Function,
        layer,
        availability,
    }
}

const fn data(name: &'static str, layer: Layer) -> Symbol {
    Symbol {
        name,
        kind: SymbolKind::Data,
        layer,
        availability: Availability::Always,
    }
}

pub const INTRINSICS: &[Symbol] = &[
    func("__compiler_memory_barrier", Layer::Intrinsics, Availability::Always),
    func("__nop", Layer::Intrinsics, Availability::Always),
    func("__sev", Layer::Intrinsics, Availability::Always),
    func("__wfe", Layer::Intrinsics, Availability::Always),
    func("__wfi", Layer::Intrinsics, Availability::Always),
    func("__dmb", Layer::Intrinsics, Availability::Always),
    func("__dsb", Layer::Intrinsics, Availability::Always),
    func("__isb", Layer::Intrinsics, Availability::Always),
    func("__breakpoint", Layer::Intrinsics, Availability::Always),
    func("__get_current_exception", Layer::Intrinsics, Availability::Always),
    func("pico_processor_state_is_nonsecure", Layer::Intrinsics, Availability::Always),
    func("busy_wait_at_least_cycles", Layer::Intrinsics, Availability::Always),
    func("__mul_instruction", Layer::Intrinsics, Availability::Always),
    func("__aeabi_idiv0", Layer::Intrinsics, Availability::Arm),
    func("__aeabi_ldiv0", Layer::Intrinsics, Availability::Arm),
];

pub const LIBC: &[Symbol] = &[
    func("strlen", Layer::Libc, Availability::Always),
    func("memcpy", Layer::Libc, Availability::Always),
    func("memset", Layer::Libc, Availability::Always),
    func("memcmp", Layer::Libc, Availability::Always),
    func("malloc", Layer::Libc, Availability::Always),
    func("calloc", Layer::Libc, Availability::Always),
    func("realloc", Layer::Libc, Availability::Always),
    func("free", Layer::Libc, Availability::Always),
    func("exit", Layer::Libc, Availability::Always),
    func("_exit", Layer::Libc, Availability::Always),
    func("abort", Layer::Libc, Availability::Always),
    func("__assert_func", Layer::Libc, Availability::Always),
    func("__assert_fail", Layer::Libc, Availability::Always),
    func("puts", Layer::Libc, Availability::Always),
    func("putchar", Layer::Libc, Availability::Always),
    func("vprintf", Layer::Libc, Availability::Always),
    func("write", Layer::Libc, Availability::Always),
    func("abs", Layer::Libc, Availability::Always),
    func("labs", Layer::Libc, Availability::Always),
    func("atoi", Layer::Libc, Availability::Always),
    func("atol", Layer::Libc, Availability::Always),
    func("runtime_init_default_alarm_pool", Layer::Libc, Availability::Always),
];

pub const RUNTIME: &[Symbol] = &[
    func("runtime_init", Layer::Runtime, Availability::Always),
    func("irq_handler_chain_remove_tail", Layer::Runtime, Availability::Always),
    data("irq_handler_chain_slots", Layer::Runtime),
    data("irq_handler_chain_first_slot", Layer::Runtime),
    data("picobase_last_diagnostic", Layer::Runtime),
];

pub const GPIO_COPROC: &[Symbol] = &[
    func("gpioc_lo_out_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_out_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_out_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_out_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_out_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_out_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_out_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_out_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_out_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_out_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_out_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_out_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_oe_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_oe_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_oe_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_oe_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_oe_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_oe_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_oe_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_oe_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_oe_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_oe_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_oe_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_oe_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_xor2", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_set2", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_out_clr2", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_xor2", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_set2", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_bit_oe_clr2", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_out_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_out_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_out_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_out_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_oe_put", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_oe_xor", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_oe_set", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_index_oe_clr", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_out_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_out_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_out_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_oe_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_oe_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_oe_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_lo_in_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hi_in_get", Layer::GpioCoproc, Availability::Rp2350Arm),
    func("gpioc_hilo_in_get", Layer::GpioCoproc, Availability::Rp2350Arm),
];

/// A build configuration to check a linked image against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub arch: Arch,
    pub chip: Chip,
    pub libc: bool,
    pub runtime: bool,
    pub gpio_coproc: bool,
}

impl Profile {
    /// Rejects combinations no hardware provides.
    pub const fn validate(&self) -> Result<(), &'static str> {
        if matches!((self.arch, self.chip), (Arch::Riscv, Chip::Rp2040)) {
            return Err("RP2040 has no RISC-V cores");
        }
        if self.gpio_coproc && !Availability::Rp2350Arm.applies(self.arch, self.chip) {
            return Err("the GPIO coprocessor exists only on RP2350 Arm cores");
        }
        Ok(())
    }

    /// Symbols this profile must define, in table order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static Symbol> + '_ {
        let layers: [(&'static [Symbol], bool); 4] = [
            (INTRINSICS, true),
            (LIBC, self.libc),
            (RUNTIME, self.runtime),
            (GPIO_COPROC, self.gpio_coproc),
        ];
        layers
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .flat_map(|(table, _)| table.iter())
            .filter(move |s| s.availability.applies(self.arch, self.chip))
    }
}
