//! Fixed width large integer types
//!
//! Some algorithms need numbers that are wider than the 128 bits the native
//! integer types offer, but never grow past a known width. To make things a
//! bit more ergonomic without requiring large dependencies or weirdly
//! implemented big numbers, this crate implements such fixed width (unsigned)
//! integers.
//!
//! The aim of this library is to be simple to use and understand. Big numbers
//! are just structs with arrays of native words, and all arithmetic wraps at
//! the type width like the native integers do.

/// Implements [U384](u384::U384).
pub mod u384;
