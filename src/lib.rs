/// sealdrop library crate — exposes internal modules for integration tests.
///
/// All protocol modules are re-exported publicly so that `tests/` integration
/// tests can access the seal/open pipeline via `use sealdrop::crypto::*`.
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod frame;
