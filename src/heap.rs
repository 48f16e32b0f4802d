//! The raw storage entry points.
//!
//! Every obtain variant funnels into one retry loop: attempt the underlying
//! allocator, and on exhaustion give the installed
//! [`ExhaustHandler`](crate::ExhaustHandler) a chance to reclaim storage
//! before trying again. The variants differ only in how an exhaustion that
//! no handler absorbs is reported, and in which allocator primitive serves
//! the attempt.

use core::mem;
use core::ptr::NonNull;

use crate::exhaust::exhaust_handler;
use crate::platform;

/// Alignment requests at or below this threshold are no-ops: the general
/// allocator already aligns everything at least this strictly.
pub const MIN_ALIGN: usize = mem::align_of::<*mut u8>();

/// The shared retry loop. Returns `None` only once an attempt has failed
/// with no handler installed.
fn try_obtain(size: usize, align: usize) -> Option<NonNull<u8>> {
    debug_assert!(align.is_power_of_two());
    // Zero-size requests still hand out distinct, freeable storage, so
    // callers never conflate "no allocation" with "empty allocation".
    let size = if size == 0 { 1 } else { size };
    loop {
        let attempt = if align <= MIN_ALIGN {
            platform::allocate(size)
        } else {
            platform::allocate_aligned(size, align)
        };
        if attempt.is_some() {
            return attempt;
        }
        match exhaust_handler() {
            Some(reclaim) => reclaim(),
            None => return None,
        }
    }
}

/// Exhaustion that no handler absorbed, observed by an infallible variant.
#[cold]
#[inline(never)]
fn exhausted(size: usize) -> ! {
    #[cfg(feature = "unwind")]
    panic!("memory allocation of {} bytes failed", size);
    #[cfg(not(feature = "unwind"))]
    {
        let _ = size;
        crate::terminate()
    }
}

/// Obtains `size` bytes of raw storage.
///
/// A zero `size` is treated as one byte, so the returned pointer is always
/// distinct and must be released like any other. The storage is aligned to
/// at least [`MIN_ALIGN`].
///
/// # Panics
///
/// Panics once the allocator is exhausted and no
/// [`ExhaustHandler`](crate::ExhaustHandler) remains installed. Builds
/// without the `unwind` feature call [`terminate`](crate::terminate())
/// instead.
pub fn allocate(size: usize) -> NonNull<u8> {
    match try_obtain(size, MIN_ALIGN) {
        Some(ptr) => ptr,
        None => exhausted(size),
    }
}

/// [`allocate`] with an explicit power-of-two alignment.
///
/// Alignments at or below [`MIN_ALIGN`] are served by the general
/// allocator; stricter ones go through the alignment-aware allocator.
///
/// # Panics
///
/// Same exhaustion behavior as [`allocate`].
pub fn allocate_aligned(size: usize, align: usize) -> NonNull<u8> {
    match try_obtain(size, align) {
        Some(ptr) => ptr,
        None => exhausted(size),
    }
}

/// Non-panicking [`allocate`]: unabsorbed exhaustion is `None`.
pub fn try_allocate(size: usize) -> Option<NonNull<u8>> {
    try_obtain(size, MIN_ALIGN)
}

/// Non-panicking [`allocate_aligned`]: unabsorbed exhaustion is `None`.
pub fn try_allocate_aligned(size: usize, align: usize) -> Option<NonNull<u8>> {
    try_obtain(size, align)
}

/// Array form of [`allocate`]; forwards unchanged.
pub fn allocate_array(size: usize) -> NonNull<u8> {
    allocate(size)
}

/// Array form of [`allocate_aligned`]; forwards unchanged.
pub fn allocate_array_aligned(size: usize, align: usize) -> NonNull<u8> {
    allocate_aligned(size, align)
}

/// Array form of [`try_allocate`]; forwards unchanged.
pub fn try_allocate_array(size: usize) -> Option<NonNull<u8>> {
    try_allocate(size)
}

/// Array form of [`try_allocate_aligned`]; forwards unchanged.
pub fn try_allocate_array_aligned(size: usize, align: usize) -> Option<NonNull<u8>> {
    try_allocate_aligned(size, align)
}

/// Treats `place` as already-suitable storage for `size` bytes.
///
/// Performs no allocation and never fails; the address comes back
/// unchanged. The caller, not this crate, owns the storage's lifetime.
pub fn allocate_at(place: NonNull<u8>, _size: usize) -> NonNull<u8> {
    place
}

/// Array form of [`allocate_at`]; forwards unchanged.
pub fn allocate_array_at(place: NonNull<u8>, size: usize) -> NonNull<u8> {
    allocate_at(place, size)
}

/// Releases storage previously obtained from this module.
///
/// Null is a safe no-op. The release is unconditional: it cannot fail and
/// reports nothing.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by one of the obtain entry
/// points (any variant, aligned or not) that has not already been
/// released.
pub unsafe fn deallocate(ptr: *mut u8) {
    // SAFETY: forwarded caller contract.
    unsafe { platform::release(ptr) }
}

/// [`deallocate`] with the allocation size the call site happens to know.
///
/// The size is not consulted; the parameter keeps sized release sites
/// shaped like their obtain sites.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_sized(ptr: *mut u8, _size: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate(ptr) }
}

/// [`deallocate`] for storage obtained with an explicit alignment. The
/// alignment is not consulted.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_aligned(ptr: *mut u8, _align: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate(ptr) }
}

/// Sized and aligned release; both tags are ignored.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_sized_aligned(ptr: *mut u8, _size: usize, _align: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate(ptr) }
}

/// Array form of [`deallocate`]; forwards unchanged.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_array(ptr: *mut u8) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate(ptr) }
}

/// Array form of [`deallocate_sized`]; forwards unchanged.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_array_sized(ptr: *mut u8, size: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate_sized(ptr, size) }
}

/// Array form of [`deallocate_aligned`]; forwards unchanged.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_array_aligned(ptr: *mut u8, align: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate_aligned(ptr, align) }
}

/// Array form of [`deallocate_sized_aligned`]; forwards unchanged.
///
/// # Safety
///
/// Same contract as [`deallocate`].
pub unsafe fn deallocate_array_sized_aligned(ptr: *mut u8, size: usize, align: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { deallocate_sized_aligned(ptr, size, align) }
}

/// Placement counterpart of [`deallocate`]: the storage at `place` was
/// never obtained from the allocator, so nothing happens.
pub fn deallocate_at(_ptr: *mut u8, _place: NonNull<u8>) {}

/// Array form of [`deallocate_at`]; equally a no-op.
pub fn deallocate_array_at(_ptr: *mut u8, _place: NonNull<u8>) {}
