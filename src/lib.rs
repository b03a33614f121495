//! strkit - bounded string prefix matching and djb2 hashing
//!
//! This library provides two families of pure, allocation-free string
//! utilities: prefix predicates whose scans are bounded by both inputs,
//! and the djb2 non-cryptographic hash with a fixed 64-bit accumulator
//! so values reproduce across platforms and processes.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod hash;
pub mod prefix;
