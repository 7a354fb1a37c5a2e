//! Multi-precision ground work: add, shift and compare big numbers
//!
//! The arithmetic itself lives in [bint_fixed]; this module only unpacks the
//! JSON arguments, runs the operation and packs the result back up. All
//! operations wrap at 384 bits, nobody gets told about a carry out of the
//! highest word.

use anyhow::Result;
use serde_json::json;

use crate::common::interface::{get_number, get_uint, put_number};
use crate::common::veprintln;
use crate::settings::Settings;

use super::{Action, Testcase};

pub fn run_testcase(testcase: &Testcase, settings: Settings) -> Result<serde_json::Value> {
    Ok(match testcase.action {
        Action::AddNumbers => {
            let a = get_number(&testcase.arguments, "a")?;
            let b = get_number(&testcase.arguments, "b")?;
            if settings.verbose {
                veprintln("a", format_args!("{a}"));
                veprintln("b", format_args!("{b}"));
            }
            json!({"sum": put_number(a + b)})
        }
        Action::ShiftLeft => {
            let value = get_number(&testcase.arguments, "value")?;
            let amount = get_uint(&testcase.arguments, "amount")?;
            if settings.verbose {
                veprintln("value", format_args!("{value}"));
                veprintln("amount", format_args!("{amount}"));
            }
            json!({"shifted": put_number(value << amount)})
        }
        Action::CompareNumbers => {
            let a = get_number(&testcase.arguments, "a")?;
            let b = get_number(&testcase.arguments, "b")?;
            json!({"equal": a == b})
        }
        _ => unreachable!(),
    })
}
