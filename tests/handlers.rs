use std::sync::{Mutex, MutexGuard, PoisonError};

use minirt::{
    exhaust_handler, set_exhaust_handler, set_terminate_handler, terminate_handler,
    ExhaustHandler, TerminateHandler,
};

fn shed_caches() {}
fn shed_pools() {}
fn last_words() {}

// The registries are process-wide and the test runner is multi-threaded;
// every test here serializes on this lock and restores what it replaced.
fn registry_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn exhaust_registry_exchange_contract() {
    let _guard = registry_lock();
    let original = set_exhaust_handler(Some(shed_caches));

    // Install followed by get observes the install.
    assert_eq!(exhaust_handler(), Some(shed_caches as ExhaustHandler));

    // Install returns the previous value.
    let prev = set_exhaust_handler(Some(shed_pools));
    assert_eq!(prev, Some(shed_caches as ExhaustHandler));

    // Absent is representable and observable.
    let prev = set_exhaust_handler(None);
    assert_eq!(prev, Some(shed_pools as ExhaustHandler));
    assert_eq!(exhaust_handler(), None);

    let prev = set_exhaust_handler(original);
    assert_eq!(prev, None);
}

#[test]
fn terminate_registry_exchange_contract() {
    let _guard = registry_lock();
    // The built-in halting handler is observable before any install.
    let original = terminate_handler();
    assert!(original.is_some());

    let prev = set_terminate_handler(Some(last_words));
    assert_eq!(prev, original);
    assert_eq!(terminate_handler(), Some(last_words as TerminateHandler));

    let prev = set_terminate_handler(None);
    assert_eq!(prev, Some(last_words as TerminateHandler));
    assert_eq!(terminate_handler(), None);

    let prev = set_terminate_handler(original);
    assert_eq!(prev, None);
    assert_eq!(terminate_handler(), original);
}

#[test]
fn registries_are_independent() {
    let _guard = registry_lock();
    let exhaust_before = exhaust_handler();
    let terminate_before = terminate_handler();

    let prev = set_exhaust_handler(Some(shed_caches));
    assert_eq!(terminate_handler(), terminate_before);
    set_exhaust_handler(prev);

    let prev = set_terminate_handler(Some(last_words));
    assert_eq!(exhaust_handler(), exhaust_before);
    set_terminate_handler(prev);
}
