//! Abnormal termination.

use crate::platform;
use crate::slot::HandlerSlot;

/// Callback invoked by [`terminate`] before the process is halted.
///
/// A termination handler is for last words — flushing a log, marking a
/// status register — not for resuming: if it returns, the abort primitive
/// runs regardless.
pub type TerminateHandler = fn();

static TERMINATE: HandlerSlot = HandlerSlot::holding(halt);

/// Returns the currently installed termination handler.
///
/// Before any [`set_terminate_handler`] call this is the built-in handler,
/// which halts the process on the spot.
pub fn terminate_handler() -> Option<TerminateHandler> {
    TERMINATE.get()
}

/// Installs `handler` as the process-wide termination handler and returns
/// the one it replaces.
///
/// Same atomic-exchange contract as
/// [`set_exhaust_handler`](crate::set_exhaust_handler): a single swap,
/// concurrent installs each observe a distinct previous value.
pub fn set_terminate_handler(handler: Option<TerminateHandler>) -> Option<TerminateHandler> {
    TERMINATE.replace(handler)
}

/// Halts the process after giving the termination handler its say.
///
/// Used by the infallible obtain entry points on unabsorbed exhaustion in
/// builds without the `unwind` feature, and callable directly for any
/// unrecoverable failure. Control never returns to the caller: a handler
/// that returns instead of halting is followed by the abort primitive, and
/// a slot emptied with `set_terminate_handler(None)` skips straight to it.
pub fn terminate() -> ! {
    if let Some(handler) = terminate_handler() {
        handler();
    }
    platform::abort()
}

// Pre-installed so terminate() is well defined before any user install.
fn halt() {
    platform::abort()
}
