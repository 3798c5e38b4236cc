use core::mem;

/// Initializer entry: no arguments, no result.
pub type InitFn = unsafe extern "C" fn();

/// Contiguous array of initializers bounded by a start and an end marker,
/// consumed in storage order.
#[derive(Clone, Copy)]
pub struct InitArray {
    start: *const InitFn,
    end: *const InitFn,
}

impl InitArray {
    /// # Safety
    /// `start..end` must delimit a contiguous, properly aligned array of
    /// valid `InitFn` pointers that is never mutated afterward.
    #[inline]
    pub const unsafe fn from_bounds(start: *const InitFn, end: *const InitFn) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_slice(entries: &'static [InitFn]) -> Self {
        let range = entries.as_ptr_range();
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Number of entries. An inverted range counts as empty.
    #[inline]
    pub fn len(&self) -> usize {
        (self.end as usize).saturating_sub(self.start as usize) / mem::size_of::<InitFn>()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every entry from start to end (exclusive), in order.
    ///
    /// # Safety
    /// Each entry must be sound to call at this point of startup.
    pub unsafe fn run(&self) {
        let mut p = self.start;
        while p < self.end {
            unsafe { (*p)() };
            p = unsafe { p.add(1) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn bump() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    static ENTRIES: [InitFn; 4] = [bump, bump, bump, bump];

    #[test]
    fn len_counts_entries() {
        assert_eq!(InitArray::from_slice(&ENTRIES).len(), 4);
        assert_eq!(InitArray::from_slice(&ENTRIES[..1]).len(), 1);
        assert!(InitArray::from_slice(&ENTRIES[..0]).is_empty());
    }

    #[test]
    fn inverted_bounds_are_empty() {
        let range = ENTRIES.as_ptr_range();
        let array = unsafe { InitArray::from_bounds(range.end, range.start) };
        assert!(array.is_empty());
        unsafe { array.run() };
    }

    #[test]
    fn run_invokes_each_entry_once() {
        let before = CALLS.load(Ordering::SeqCst);
        unsafe { InitArray::from_slice(&ENTRIES[..3]).run() };
        assert_eq!(CALLS.load(Ordering::SeqCst) - before, 3);
    }
}
