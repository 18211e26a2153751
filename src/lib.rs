//! Library entry for ramdex exposing the catalog client, store and filters
//! for the binary and integration tests.

pub mod app;
pub mod args;
pub mod logic;
pub mod sources;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_utils;
