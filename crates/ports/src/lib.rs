// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod records;
