//! The process-wide allocation-exhaustion handler.

use crate::slot::HandlerSlot;

/// Callback invoked when the underlying allocator reports exhaustion.
///
/// The handler's job is to release storage the program can spare — caches,
/// pools, anything rebuildable — and return; the failed attempt is then
/// retried. The obtain entry points keep alternating attempt and handler
/// until an attempt succeeds or no handler is installed anymore, so a
/// handler that cannot free anything further should uninstall itself (or
/// [`terminate`](crate::terminate())) rather than return unchanged.
pub type ExhaustHandler = fn();

static EXHAUST: HandlerSlot = HandlerSlot::empty();

/// Returns the currently installed exhaustion handler, if any.
pub fn exhaust_handler() -> Option<ExhaustHandler> {
    EXHAUST.get()
}

/// Installs `handler` as the process-wide exhaustion handler and returns
/// the one it replaces.
///
/// The exchange is a single atomic operation: concurrent installs each
/// observe a distinct previous value. Passing `None` uninstalls.
pub fn set_exhaust_handler(handler: Option<ExhaustHandler>) -> Option<ExhaustHandler> {
    EXHAUST.replace(handler)
}
