/*!

> Minimal freestanding runtime support.

`minirt` supplies the handful of process-wide hooks a program normally
inherits from a full standard library: raw allocation entry points, the
"allocator exhausted" handler, the abnormal-termination handler, and the
fixed diagnostic strings for a few built-in error kinds. It is aimed at
embedded, freestanding, and panic-abort builds that want these hooks
without carrying anything else.

## The exhaustion protocol

Every obtain entry point funnels into one retry loop. An attempt that the
underlying allocator cannot satisfy does not fail immediately; instead the
process-wide [`ExhaustHandler`] is consulted. An installed handler is
invoked — its job is to release whatever storage it can spare — and the
attempt is retried, as many times as it takes. Only when no handler is
installed does the caller see the exhaustion: the `try_` variants return
`None`, and the infallible variants panic (or, in builds without the
`unwind` feature, escalate to [`terminate()`]).

```
use minirt::{allocate, deallocate, set_exhaust_handler};

fn drop_caches() {
    // Release storage the program can rebuild later.
}

let previous = set_exhaust_handler(Some(drop_caches));
assert_eq!(previous, None);

let ptr = allocate(256);
// ... use the storage ...
unsafe { deallocate(ptr.as_ptr()) };

minirt::set_exhaust_handler(previous);
```

Zero-size requests are bumped to one byte, so every successful obtain call
hands out a distinct, non-null, freeable pointer. Alignments at or below
[`MIN_ALIGN`] are served by the general allocator directly; larger powers
of two go through the alignment-aware allocator.

## Termination

[`terminate()`] invokes the process-wide [`TerminateHandler`] and then
halts the process. The handler gets last words, not a veto: if it returns,
the abort primitive runs anyway. A built-in handler that halts on the spot
is pre-installed, so `terminate` is well defined before anyone calls
[`set_terminate_handler`].

## Rust allocator integration

[`Malloc`] implements [`GlobalAlloc`](core::alloc::GlobalAlloc) on top of
the same retry loop, so a whole program can opt into the exhaustion
protocol:

```
#[global_allocator]
static GLOBAL: minirt::Malloc = minirt::Malloc;

fn main() {
    let v = vec![1, 2, 3];
    assert_eq!(v.len(), 3);
}
```

With the `allocator-api2` feature it also implements that crate's stable
`Allocator` trait for per-container use.

## Cargo features

- `unwind` *(default)* — exhausted infallible allocations panic. Disable it
  for builds that cannot unwind; they call [`terminate()`] instead.
- `std` — `std::error::Error` impls for the diagnostic types and
  `std::process::abort` as the abort primitive.
- `allocator-api2` — `Allocator` impl for [`Malloc`].

The crate is `#![no_std]`; the underlying allocation and abort primitives
are the C runtime's.

 */

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod alloc;
mod error;
mod exhaust;
mod heap;
mod platform;
mod slot;
mod terminate;

pub use crate::alloc::Malloc;
pub use crate::error::{BadArrayLength, BadCast, BadWeakRef};
pub use crate::exhaust::{exhaust_handler, set_exhaust_handler, ExhaustHandler};
pub use crate::heap::{
    allocate, allocate_aligned, allocate_array, allocate_array_aligned, allocate_array_at,
    allocate_at, deallocate, deallocate_aligned, deallocate_array, deallocate_array_aligned,
    deallocate_array_at, deallocate_array_sized, deallocate_array_sized_aligned, deallocate_at,
    deallocate_sized, deallocate_sized_aligned, try_allocate, try_allocate_aligned,
    try_allocate_array, try_allocate_array_aligned, MIN_ALIGN,
};
pub use crate::terminate::{set_terminate_handler, terminate, terminate_handler, TerminateHandler};

// Unit tests that touch a registry or the fault switch all run under this
// lock; the statics are process-wide and the default test runner is
// multi-threaded.
#[cfg(test)]
pub(crate) fn registry_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
