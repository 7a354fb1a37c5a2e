//! Modular reduction for the NIST P-192 prime
//!
//! p192 = 2^192 - 2^64 - 1, which means 2^192 ≡ 2^64 + 1 (mod p192). A 384
//! bit number (say, the accumulator for a product of two 192 bit numbers)
//! can therefore be reduced by adding its high half back into its low half
//! twice, once at bit 0 and once at bit 64, instead of dividing. The part of
//! the 2^64 offset copy that itself sticks out past bit 192 wraps around the
//! same way, which is what gives the fold schedule below its shape.

use anyhow::Result;
use bint_fixed::u384::{U384, WORDS};
use serde_json::json;

use crate::common::interface::{get_number, put_number};
use crate::common::veprintln;
use crate::settings::Settings;

use super::{Action, Testcase};

/// The NIST P-192 prime, p192 = 2^192 - 2^64 - 1.
pub const P192: U384 = U384::new([
    0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0, 0, 0, 0, 0, 0,
]);

/// Which high words fold into each of the low words 0..=5.
///
/// Low word i receives the high half at bit 0 (word 6+i), the high half at
/// bit 64 (word 4+i, for i >= 2) and the wrapped top of the offset copy
/// (words 10/11 again, for i <= 3). Flattened, this is the schedule
/// 6,10,7,11,8,6,10,9,7,11,10,8,11,9.
const FOLD_SCHEDULE: [&[usize]; 6] = [
    &[6, 10],
    &[7, 11],
    &[8, 6, 10],
    &[9, 7, 11],
    &[10, 8],
    &[11, 9],
];

/// Reduce a 384 bit number modulo [P192].
///
/// The input is assumed to be smaller than p192^2; there is no magnitude
/// check. Words 6..=11 of the result are always zero. The result is NOT
/// guaranteed to lie in [0, p192): the fold only collapses the overflow past
/// bit 192, it never trial-subtracts p192 itself. Callers that need the
/// canonical representative have to do that final conditional subtraction
/// themselves.
pub fn reduce(value: U384) -> U384 {
    let mut words: [u32; WORDS] = value.into();

    // primary fold: add every scheduled high word into its low word,
    // counting carry-outs per low word and handing them to the next one.
    // The hand-over addition itself is not carry-checked, same as in the
    // word-by-word reference computation.
    let mut fold_carry = [0u32; 6];
    for (i, sources) in FOLD_SCHEDULE.iter().enumerate() {
        for &source in *sources {
            let (sum, overflow) = words[i].overflowing_add(words[source]);
            words[i] = sum;
            if overflow {
                fold_carry[i] += 1;
            }
        }
        if i > 0 {
            words[i] = words[i].wrapping_add(fold_carry[i - 1]);
        }
    }

    // carries out of word 5 are an overflow past bit 192: fold them back in
    // with the same identity, i.e. into word 0 and word 2
    if fold_carry[5] > 0 {
        let mut wrap_carry = [0u32; 6];
        for i in 0..6 {
            let addend = match i {
                0 => fold_carry[5],
                2 => fold_carry[5] + wrap_carry[1],
                _ => wrap_carry[i - 1],
            };
            let (sum, overflow) = words[i].overflowing_add(addend);
            words[i] = sum;
            if overflow {
                wrap_carry[i] += 1;
            }
        }
        // a single bit can survive even the second pass; one more correction
        // collapses it for good
        if wrap_carry[5] > 0 {
            words[0] = words[0].wrapping_add(wrap_carry[5]);
            words[2] = words[2].wrapping_add(wrap_carry[5]);
        }
    }

    // the high half is fully absorbed now
    for word in &mut words[6..] {
        *word = 0;
    }
    U384::from(words)
}

pub fn run_testcase(testcase: &Testcase, settings: Settings) -> Result<serde_json::Value> {
    Ok(match testcase.action {
        Action::Modp192Reduce => {
            let value = get_number(&testcase.arguments, "value")?;
            let reduced = reduce(value);
            if settings.verbose {
                veprintln("value", format_args!("{value}"));
                veprintln("reduced", format_args!("{reduced}"));
            }
            json!({"reduced": put_number(reduced)})
        }
        _ => unreachable!(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_reduces_to(input: &str, low_half: &str) {
        let value = U384::from_hex(input).expect("bad input vector");
        let reduced = reduce(value);
        assert_eq!(
            reduced.to_string(),
            format!("{}{low_half}", "0".repeat(48)),
            "reduction of {input}"
        );
    }

    #[test]
    fn test_p192_renders_correctly() {
        assert_eq!(
            P192.to_string(),
            format!("{}FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF", "0".repeat(48))
        );
    }

    #[test]
    fn test_reduce_assignment_vector() {
        assert_reduces_to(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF4444444444444445678887543890789AB0CEFFFFFFFFFFFFFFFFFFFFFFF",
            "444456788875438A07899F5134444445FFFFF44444444444",
        );
    }

    #[test]
    fn test_reduce_known_vectors() {
        assert_reduces_to(
            "9c96882ee787d2ffd1d5203b37ac0f93be00fc4cc384b000048720f98635133048f2dcb0ea813410ec470b15b6827bbf",
            "72F2C963A568F5C4755F8167CD39C6A546DE8F91618EFEBF",
        );
        assert_reduces_to(
            "65e635321cb6aa3de6a9704125856bd5c46e4c531f0f3c420bd650e6a48e90b672f57708def13a9dc172d66da06783d9",
            "5865F659E6CAA6CA83F368CF403C8CF3EBC757F2DC2D6A59",
        );
        assert_reduces_to(
            "bfb0ea3d5bf9cef301ea608e20ab8f6fe601f02123323d59ffffffff00000001ffffffff111111110000ffffffffffff",
            "C19B4ACA7CA55E65A79D3AEBB0E8ACCEA5B3DA5E7F2C0C4C",
        );
        assert_reduces_to(
            "90a54935dbc97516efad8ae7de72a15290f44f19545dfcdbd5e058757b862406b05ac89c8075988ff5a302d3bfaf9665",
            "56332C9335C23A70C1A1EBD38F0FABD6173C9B22EFD70858",
        );
    }

    #[test]
    fn test_reduce_runs_the_wrap_pass() {
        // every word of the input is at the ceiling, so the primary fold
        // overflows bit 192 twice and the wrap pass has to run
        assert_reduces_to(&"f".repeat(96), "FFFFFFFF000000010000000000000000FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_reduce_small_values_are_fixed_points() {
        let small = U384::from_hex("123456789ABCDEF").unwrap();
        assert_eq!(reduce(small), small);
        assert_eq!(reduce(U384::ZERO), U384::ZERO);
        assert_eq!(reduce(U384::ONE), U384::ONE);
    }

    #[test]
    fn test_reduce_does_not_canonicalize() {
        // p192 itself is congruent to zero but comes back unchanged: the
        // fold never trial-subtracts the prime
        assert_eq!(reduce(P192), P192);
    }

    #[test]
    fn test_reduce_zeroes_the_high_half() {
        let inputs = [
            "f".repeat(96),
            "deadbeef".repeat(12),
            format!("1{}", "0".repeat(95)),
        ];
        for input in inputs {
            let words: [u32; WORDS] = reduce(U384::from_hex(&input).unwrap()).into();
            assert_eq!(words[6..], [0, 0, 0, 0, 0, 0], "high half of {input}");
        }
    }
}
