#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn overflow_hidden_only_when_locked() {
    assert_eq!(overflow_value(true), "hidden");
    assert_eq!(overflow_value(false), "");
}

#[test]
fn set_locked_is_noop_but_callable() {
    set_locked(true);
    set_locked(false);
}
