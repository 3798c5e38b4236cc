//! Storage for the SDK's shared IRQ handler chaining.
//!
//! Only the reservation lives here. Chained handlers are not supported in
//! this profile, so removing the tail of a chain does nothing.

use foundation::HandlerSlots;

pub const IRQ_HANDLER_CHAIN_SLOT_COUNT: usize = 1;

#[cfg_attr(target_os = "none", export_name = "irq_handler_chain_slots")]
#[cfg_attr(target_os = "none", link_section = ".data")]
pub static IRQ_HANDLER_CHAIN_SLOTS: HandlerSlots<IRQ_HANDLER_CHAIN_SLOT_COUNT> =
    HandlerSlots::new();

#[cfg_attr(target_os = "none", export_name = "irq_handler_chain_first_slot")]
#[cfg_attr(target_os = "none", link_section = ".data")]
pub static IRQ_HANDLER_CHAIN_FIRST_SLOT: HandlerSlots<1> = HandlerSlots::new();

#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn irq_handler_chain_remove_tail() {}
