//! Helps parse a few common datatypes from the JSON challenge definitions and write them back out

use anyhow::{anyhow, Result};
use bint_fixed::u384::U384;

/// Read a hexadecimal number of the JSON challenge definition as a [U384].
///
/// All numbers are encoded as hex strings, most significant digit first,
/// without a `0x` prefix.
pub fn get_number(args: &serde_json::Value, key: &str) -> Result<U384> {
    if !args[key].is_string() {
        return Err(anyhow!("{key} is not a string"));
    }
    let raw: String = serde_json::from_value(args[key].clone())
        .inspect_err(|e| eprintln!("! something went wrong when serializing {key}: {e}"))?;
    U384::from_hex(&raw).map_err(|e| anyhow!("{key} is not a hexadecimal number: {e}"))
}

/// Read a small unsigned integer (e.g. a shift amount) from the JSON challenge definition.
pub fn get_uint(args: &serde_json::Value, key: &str) -> Result<u32> {
    serde_json::from_value(args[key].clone())
        .map_err(|e| anyhow!("{key} is not an unsigned integer: {e}"))
}

/// Convert a [U384] to a [serde_json::Value] holding its hexadecimal text form.
#[inline]
pub fn put_number(num: U384) -> serde_json::Value {
    num.to_string().into()
}
