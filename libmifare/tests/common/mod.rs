// Shared helpers for integration tests. Each aggregator declares `mod common;`.
#![allow(dead_code)]

pub mod fixtures;

/// Route `log` output through env_logger; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
