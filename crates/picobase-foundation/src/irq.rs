use core::cell::UnsafeCell;

pub type Handler = unsafe extern "C" fn();

/// Fixed-capacity handler storage with the same layout as a C array of
/// function pointers. The chaining algorithm that fills it lives elsewhere.
#[repr(transparent)]
pub struct HandlerSlots<const N: usize>(UnsafeCell<[Option<Handler>; N]>);

// Written only by the external chaining code, which serializes access.
unsafe impl<const N: usize> Sync for HandlerSlots<N> {}

impl<const N: usize> HandlerSlots<N> {
    pub const fn new() -> Self {
        Self(UnsafeCell::new([None; N]))
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn as_mut_ptr(&self) -> *mut Option<Handler> {
        self.0.get().cast()
    }

    /// # Safety
    /// No write to the slots may race with this read.
    #[inline]
    pub unsafe fn get(&self, index: usize) -> Option<Handler> {
        unsafe { (*self.0.get()).get(index).copied().flatten() }
    }
}

impl<const N: usize> Default for HandlerSlots<N> {
    fn default() -> Self {
        Self::new()
    }
}
