//! Integer helpers that need no locale or heap.

use core::ffi::{c_char, c_int, c_long};

#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn abs(n: c_int) -> c_int {
    n.wrapping_abs()
}

#[cfg_attr(target_os = "none", no_mangle)]
pub extern "C" fn labs(n: c_long) -> c_long {
    n.wrapping_abs()
}

/// Leading whitespace, an optional sign, then decimal digits up to the first
/// non-digit. Overflow wraps.
unsafe fn parse_decimal(mut s: *const c_char) -> i64 {
    while is_space(*s as u8) {
        s = s.add(1);
    }

    let negative = match *s as u8 {
        b'-' => {
            s = s.add(1);
            true
        }
        b'+' => {
            s = s.add(1);
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    loop {
        let c = *s as u8;
        if !c.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add((c - b'0') as i64);
        s = s.add(1);
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// # Safety
/// `s` must point to a NUL-terminated string.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn atoi(s: *const c_char) -> c_int {
    parse_decimal(s) as c_int
}

/// # Safety
/// `s` must point to a NUL-terminated string.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn atol(s: *const c_char) -> c_long {
    parse_decimal(s) as c_long
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_handles_extremes() {
        assert_eq!(abs(-7), 7);
        assert_eq!(abs(7), 7);
        assert_eq!(abs(0), 0);
        assert_eq!(abs(c_int::MIN), c_int::MIN);
        assert_eq!(labs(-9), 9);
        assert_eq!(labs(c_long::MIN), c_long::MIN);
    }

    #[test]
    fn atoi_parses_signed_decimal() {
        unsafe {
            assert_eq!(atoi(c"42".as_ptr()), 42);
            assert_eq!(atoi(c"  \t-17xyz".as_ptr()), -17);
            assert_eq!(atoi(c"+8".as_ptr()), 8);
            assert_eq!(atoi(c"007".as_ptr()), 7);
        }
    }

    #[test]
    fn atoi_without_digits_is_zero() {
        unsafe {
            assert_eq!(atoi(c"".as_ptr()), 0);
            assert_eq!(atoi(c"abc".as_ptr()), 0);
            assert_eq!(atoi(c"-".as_ptr()), 0);
            assert_eq!(atoi(c"- 5".as_ptr()), 0);
        }
    }

    #[test]
    fn atol_matches_atoi_in_range() {
        unsafe {
            assert_eq!(atol(c"-2147483648".as_ptr()), -2147483648);
            assert_eq!(atol(c"123456".as_ptr()), 123456);
        }
    }
}
