//! End-to-end integration tests.
//!
//! These tests drive `cas-client` against a wiremock CAS server over real
//! HTTP.

mod proxy;
mod registry;
