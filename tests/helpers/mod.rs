// Shared fixtures for integration tests.
//
// Each integration test binary pulls this in with
//   #[path = "../helpers/mod.rs"] mod helpers;
// so not every helper is used by every binary.
#![allow(dead_code)]


pub use test_data::*;
