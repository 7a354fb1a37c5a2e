//! Implements some helper functions that I might need in multiple challenges

pub mod interface;

use std::fmt;

/// Print a key value pair to stderr, aligned like the other verbose output.
#[inline]
pub fn veprintln(key: &str, value: fmt::Arguments<'_>) {
    eprintln!("? {key: <12}: {value}");
}
