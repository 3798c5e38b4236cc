//! Allocation entry points. There is no heap: any request is a program
//! error and trap-halts, so a caller can never branch on a null result.

use core::ffi::c_void;

use foundation::halt::{self, Diagnostic, Halt};

pub fn malloc_with<H: Halt>(_size: usize) -> ! {
    halt::trap::<H>(Diagnostic::Malloc)
}

pub fn calloc_with<H: Halt>(_nmemb: usize, _size: usize) -> ! {
    halt::trap::<H>(Diagnostic::Calloc)
}

pub fn realloc_with<H: Halt>(_ptr: *mut c_void, _size: usize) -> ! {
    halt::trap::<H>(Diagnostic::Realloc)
}

/// Null is a no-op. Nothing can have been allocated, so any other pointer
/// is a logic error.
pub fn free_with<H: Halt>(ptr: *mut c_void) {
    if !ptr.is_null() {
        halt::trap::<H>(Diagnostic::Free)
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "none")] {
        use foundation::kfn::Platform;

        #[no_mangle]
        pub extern "C" fn malloc(size: usize) -> *mut c_void {
            malloc_with::<Platform>(size)
        }

        #[no_mangle]
        pub extern "C" fn calloc(nmemb: usize, size: usize) -> *mut c_void {
            calloc_with::<Platform>(nmemb, size)
        }

        #[no_mangle]
        pub extern "C" fn realloc(ptr: *mut c_void, size: usize) -> *mut c_void {
            realloc_with::<Platform>(ptr, size)
        }

        #[no_mangle]
        pub extern "C" fn free(ptr: *mut c_void) {
            free_with::<Platform>(ptr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr;
    use foundation::testing::PanicHalt;

    #[test]
    #[should_panic(expected = "trap-halt: malloc")]
    fn malloc_traps() {
        malloc_with::<PanicHalt>(16);
    }

    #[test]
    #[should_panic(expected = "trap-halt: malloc")]
    fn malloc_zero_still_traps() {
        malloc_with::<PanicHalt>(0);
    }

    #[test]
    #[should_panic(expected = "trap-halt: calloc")]
    fn calloc_traps() {
        calloc_with::<PanicHalt>(4, 4);
    }

    #[test]
    #[should_panic(expected = "trap-halt: realloc")]
    fn realloc_of_null_traps() {
        realloc_with::<PanicHalt>(ptr::null_mut(), 32);
    }

    #[test]
    fn free_null_returns() {
        free_with::<PanicHalt>(ptr::null_mut());
    }

    #[test]
    #[should_panic(expected = "trap-halt: free")]
    fn free_non_null_traps() {
        let mut word = 0u32;
        free_with::<PanicHalt>((&mut word as *mut u32).cast());
    }
}
