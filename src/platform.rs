//! Bindings to the host allocation and abort primitives.
//!
//! Everything here is an opaque external service: the general allocator
//! (`malloc`), the alignment-aware allocator (`aligned_alloc`, which needs a
//! C11 runtime), the release primitive (`free`), and the process abort.
//! Exhaustion is reported as null; partial allocations do not happen.

use core::ffi::c_void;
use core::ptr::NonNull;

extern "C" {
    fn malloc(size: usize) -> *mut c_void;
    fn aligned_alloc(align: usize, size: usize) -> *mut c_void;
    fn free(ptr: *mut c_void);
}

/// Requests `size` bytes from the general allocator.
pub(crate) fn allocate(size: usize) -> Option<NonNull<u8>> {
    #[cfg(test)]
    if fault::deny() {
        return None;
    }
    // SAFETY: malloc accepts any size and reports exhaustion as null.
    NonNull::new(unsafe { malloc(size) }.cast())
}

/// Requests `size` bytes aligned to `align`, a power of two stricter than
/// the general allocator's guarantee.
pub(crate) fn allocate_aligned(size: usize, align: usize) -> Option<NonNull<u8>> {
    #[cfg(test)]
    if fault::deny() {
        return None;
    }
    // C11 wants the size to be a multiple of the alignment. A request so
    // large that the rounding overflows cannot be satisfied anyway.
    let size = size.checked_add(align - 1)? & !(align - 1);
    // SAFETY: `align` is a power of two and `size` is a multiple of it.
    NonNull::new(unsafe { aligned_alloc(align, size) }.cast())
}

/// Returns storage to the allocator. Null is a no-op, as `free` specifies.
///
/// # Safety
///
/// `ptr` must be null or a live pointer obtained from [`allocate`] or
/// [`allocate_aligned`].
pub(crate) unsafe fn release(ptr: *mut u8) {
    // SAFETY: forwarded caller contract.
    unsafe { free(ptr.cast()) }
}

/// Halts the process abruptly. No unwinding, no cleanup, no return.
#[cfg(feature = "std")]
pub(crate) fn abort() -> ! {
    std::process::abort()
}

/// Halts the process abruptly. No unwinding, no cleanup, no return.
#[cfg(not(feature = "std"))]
pub(crate) fn abort() -> ! {
    extern "C" {
        #[link_name = "abort"]
        fn c_abort() -> !;
    }
    // SAFETY: provided by the C runtime and never returns.
    unsafe { c_abort() }
}

#[cfg(test)]
pub(crate) mod fault {
    //! Test-only switch that makes the primitives report exhaustion, in
    //! place of swapping out the process allocator under the test harness.

    use core::sync::atomic::{AtomicUsize, Ordering::SeqCst};

    static DENY: AtomicUsize = AtomicUsize::new(0);

    /// The next `n` allocation attempts report exhaustion.
    pub(crate) fn deny_next(n: usize) {
        DENY.store(n, SeqCst);
    }

    pub(crate) fn deny() -> bool {
        DENY.fetch_update(SeqCst, SeqCst, |n| n.checked_sub(1)).is_ok()
    }
}
