//! The atomic cell backing the process-wide handler registries.

use core::mem;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

/// One process-wide handler slot.
///
/// The slot holds a plain `fn()` erased to a pointer, with null encoding
/// "no handler installed". Replacement is a single atomic exchange, so
/// concurrent installs each observe a distinct previous value and none is
/// lost to a read-then-write race.
pub(crate) struct HandlerSlot {
    handler: AtomicPtr<()>,
}

impl HandlerSlot {
    pub(crate) const fn empty() -> Self {
        Self {
            handler: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub(crate) const fn holding(handler: fn()) -> Self {
        Self {
            handler: AtomicPtr::new(handler as *mut ()),
        }
    }

    /// Installs `handler`, returning the previously installed value.
    pub(crate) fn replace(&self, handler: Option<fn()>) -> Option<fn()> {
        let raw = match handler {
            Some(f) => f as *mut (),
            None => ptr::null_mut(),
        };
        decode(self.handler.swap(raw, Ordering::AcqRel))
    }

    pub(crate) fn get(&self) -> Option<fn()> {
        decode(self.handler.load(Ordering::Acquire))
    }
}

fn decode(raw: *mut ()) -> Option<fn()> {
    if raw.is_null() {
        None
    } else {
        // SAFETY: every non-null value stored in a slot came from `fn()`.
        Some(unsafe { mem::transmute::<*mut (), fn()>(raw) })
    }
}
