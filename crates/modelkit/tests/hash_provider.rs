//! Hashed-field behavior when no provider has been registered.
//!
//! Kept in its own test binary: provider registration is process-wide and
//! first-wins, so this must not share a process with tests that register one.

use modelkit::prelude::*;
use modelkit::{ConfigErrorKind, hash_provider};

#[test]
fn conversion_without_provider_is_config_error() {
    let field = HashedField::new();
    match field.create_instance(Value::Text("secret".to_string())) {
        Err(Error::Config(e)) => assert_eq!(e.kind, ConfigErrorKind::NoHashProvider),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn provider_lookup_without_registration_fails() {
    assert!(hash_provider().is_err());
}
