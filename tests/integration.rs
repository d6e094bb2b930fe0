//! Integration test suite.
//!
//! The `transport` tests run offline. The `records` tests need a real
//! instance and are ignored by default:
//!   SN_INSTANCE=... SN_USERNAME=... SN_PASSWORD=... \
//!     cargo test --test integration -- --ignored --nocapture

#[path = "integration/common.rs"]
mod common;
#[path = "integration/records.rs"]
mod records;
#[path = "integration/transport.rs"]
mod transport;
