//! Integration with the Rust allocation interfaces.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr;

use crate::heap;

/// The C heap, routed through the exhaustion-retry protocol.
///
/// Installing this as the global allocator sends every Rust allocation in
/// the program through [`try_allocate_aligned`](crate::try_allocate_aligned):
/// on exhaustion the installed [`ExhaustHandler`](crate::ExhaustHandler)
/// gets a chance to reclaim storage before the attempt is retried, and only
/// with no handler installed does the runtime see a null result.
///
/// ```
/// #[global_allocator]
/// static GLOBAL: minirt::Malloc = minirt::Malloc;
///
/// fn main() {
///     let v = vec![1_u32, 2, 3];
///     assert_eq!(v.iter().sum::<u32>(), 6);
/// }
/// ```
pub struct Malloc;

unsafe impl GlobalAlloc for Malloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        match heap::try_allocate_aligned(layout.size(), layout.align()) {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
        // SAFETY: `ptr` came out of `alloc` above, so it is a heap pointer.
        unsafe { heap::deallocate(ptr) }
    }

    // realloc and alloc_zeroed keep their default implementations: both
    // bottom out in the retried alloc/dealloc and inherit the protocol.
}

#[cfg(feature = "allocator-api2")]
use allocator_api2::alloc::{AllocError, Allocator};
#[cfg(feature = "allocator-api2")]
use core::ptr::NonNull;

#[cfg(feature = "allocator-api2")]
unsafe impl Allocator for Malloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        match heap::try_allocate_aligned(layout.size(), layout.align()) {
            Some(ptr) => Ok(NonNull::slice_from_raw_parts(ptr, layout.size())),
            None => Err(AllocError),
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, _layout: Layout) {
        // SAFETY: `ptr` was handed out by `allocate` above.
        unsafe { heap::deallocate(ptr.as_ptr()) }
    }
}
