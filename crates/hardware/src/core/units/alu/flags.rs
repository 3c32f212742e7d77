//! Flag Normalizer.
//!
//! Every arithmetic and logic result is computed in a wide signed integer and
//! then folded back into its operand width here. Folding reports two flags:
//!
//! - **carry** when the raw value left the representable range in either
//!   direction (there is no separate borrow flag),
//! - **zero** when the raw value was exactly zero.
//!
//! The two are never set together: a raw value that wraps to zero reports
//! carry only.

use crate::core::arch::reg::Width;
use crate::core::arch::status::StatusRegister;

/// Result of folding a raw value into a width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Value reduced into `0..modulus`.
    pub value: u16,
    /// Raw value was `>= modulus` or negative.
    pub carry: bool,
    /// Raw value was zero.
    pub zero: bool,
}

impl Normalized {
    /// Copies carry and zero into `sr`, leaving every other flag alone.
    pub const fn apply(self, sr: &mut StatusRegister) {
        sr.set_carry(self.carry);
        sr.set_zero(self.zero);
    }
}

/// Folds `value` into `width`.
///
/// # Arguments
///
/// * `value` - Raw, unbounded result of an operation.
/// * `width` - Destination width.
///
/// # Returns
///
/// The reduced value with its carry and zero flags.
pub const fn normalize(value: i64, width: Width) -> Normalized {
    let modulus = width.modulus();
    if value >= modulus {
        Normalized {
            value: (value % modulus) as u16,
            carry: true,
            zero: false,
        }
    } else if value == 0 {
        Normalized {
            value: 0,
            carry: false,
            zero: true,
        }
    } else if value < 0 {
        // rem_euclid keeps exact negative multiples of the modulus at 0.
        Normalized {
            value: value.rem_euclid(modulus) as u16,
            carry: true,
            zero: false,
        }
    } else {
        Normalized {
            value: value as u16,
            carry: false,
            zero: false,
        }
    }
}

/// Folds `value` into 8 bits.
pub const fn normalize8(value: i64) -> Normalized {
    normalize(value, Width::Byte)
}

/// Folds `value` into 16 bits.
pub const fn normalize16(value: i64) -> Normalized {
    normalize(value, Width::Word)
}
