// Host-side tests for at-most-once resource release.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;
use std::cell::Cell;
use std::rc::Rc;

struct Counted(Rc<Cell<u32>>);

impl Release for Counted {
    fn release(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn teardown_releases_once() {
    let count = Rc::new(Cell::new(0));
    let mut lc = Lifecycle::new(Counted(count.clone()));
    assert!(lc.is_live());
    assert!(lc.teardown());
    assert!(!lc.teardown());
    assert!(!lc.is_live());
    drop(lc);
    assert_eq!(count.get(), 1);
}

#[test]
fn drop_releases_a_live_resource() {
    let count = Rc::new(Cell::new(0));
    {
        let _lc = Lifecycle::new(Counted(count.clone()));
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn empty_lifecycle_has_nothing_to_release() {
    let mut lc: Lifecycle<Counted> = Lifecycle::empty();
    assert!(!lc.is_live());
    assert!(lc.get().is_none());
    assert!(!lc.teardown());
}

#[test]
fn access_ends_with_teardown() {
    let count = Rc::new(Cell::new(0));
    let mut lc = Lifecycle::new(Counted(count.clone()));
    assert!(lc.get_mut().is_some());
    lc.teardown();
    assert!(lc.get_mut().is_none());
    assert_eq!(count.get(), 1);
}

fn counting_hook(count: &Rc<Cell<u32>>) -> TeardownHook {
    let count = count.clone();
    TeardownHook::new(move || count.set(count.get() + 1))
}

#[test]
fn teardown_hook_fires_once() {
    let count = Rc::new(Cell::new(0));
    let mut hook = counting_hook(&count);
    assert!(hook.is_armed());
    assert!(hook.fire());
    assert!(!hook.fire());
    assert!(!hook.is_armed());
    drop(hook);
    assert_eq!(count.get(), 1);
}

#[test]
fn dropping_an_unfired_hook_runs_it() {
    let count = Rc::new(Cell::new(0));
    {
        let _hook = counting_hook(&count);
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn inert_hook_does_nothing() {
    let mut hook = TeardownHook::inert();
    assert!(!hook.is_armed());
    assert!(!hook.fire());
}
