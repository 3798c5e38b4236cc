/// Exception number from an IPSR value (`uxtb`).
#[inline(always)]
pub const fn exception_number(ipsr: u32) -> u32 {
    ipsr & 0xff
}

/// S bit of a TT response.
pub const TT_SECURE: u32 = 1 << 22;

/// `true` when the TT response for the current context reports non-secure.
#[inline(always)]
pub const fn tt_is_nonsecure(tt: u32) -> bool {
    tt & TT_SECURE == 0
}
