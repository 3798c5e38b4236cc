//! Replacements for SDK hooks whose subsystems are not linked.

/// The alarm pool needs the timer and a heap; neither is present, so the
/// default pool is never created.
#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn runtime_init_default_alarm_pool() {}
