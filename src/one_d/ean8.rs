//! EAN-8: 7 цифр нагрузки + контрольная.
//!
//! Нагрузка на одну цифру короче (нечётной длины), поэтому выравнивание весов
//! относительно контрольной цифры обратное: слева направо 3, 1, 3, … .

use crate::core::types::BarcodeError;
use crate::one_d::checksum::{self, Weights};

pub const LEN: usize = 8;

pub const WEIGHTS: Weights = Weights { even: 3, odd: 1 };

#[inline]
#[must_use]
pub fn check_digit(payload: &[u8; LEN - 1]) -> u8 {
    checksum::check_digit(payload, WEIGHTS)
}

/// # Errors
/// `InvalidLength`, `NonDigit` или `ChecksumMismatch`.
pub fn verify(code: &str) -> Result<(), BarcodeError> {
    checksum::verify(code, LEN, WEIGHTS)
}

#[inline]
#[must_use]
pub fn is_valid(code: &str) -> bool {
    verify(code).is_ok()
}
