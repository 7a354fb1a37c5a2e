//! # Citations
//!
//! - "Rechnernetze und Organisation", assignment A1: multi-precision
//!     arithmetic with big numbers as fixed arrays of 32-bit words, plus a
//!     fast reduction for the NIST P-192 prime
//! - J. A. Solinas, "Generalized Mersenne Numbers", on reductions that fold
//!     the high half of a product back in instead of dividing
//!     <https://cacr.uwaterloo.ca/techreports/1999/corr99-39.pdf>
//! - FIPS 186-4, Appendix D.1.2 for the P-192 curve parameters
//!     <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf>
pub mod challenge;
pub mod common;
pub mod settings;
