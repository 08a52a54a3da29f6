//! EAN-13: 12 цифр нагрузки + контрольная.
//!
//! Веса слева направо: 1, 3, 1, 3, … (чётный индекс → 1).
//! UPC-A — это EAN-13 с ведущим 0, отдельно не выделяем.

use crate::core::types::BarcodeError;
use crate::one_d::checksum::{self, Weights};

/// Длина кода вместе с контрольной цифрой.
pub const LEN: usize = 13;

pub const WEIGHTS: Weights = Weights { even: 1, odd: 3 };

/// Контрольная цифра для 12 цифр нагрузки.
#[inline]
#[must_use]
pub fn check_digit(payload: &[u8; LEN - 1]) -> u8 {
    checksum::check_digit(payload, WEIGHTS)
}

/// Проверка строки целиком (длина, цифры, контрольная сумма).
///
/// # Errors
/// Первое нарушение из трёх: `InvalidLength`, `NonDigit`, `ChecksumMismatch`.
pub fn verify(code: &str) -> Result<(), BarcodeError> {
    checksum::verify(code, LEN, WEIGHTS)
}

#[inline]
#[must_use]
pub fn is_valid(code: &str) -> bool {
    verify(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        for code in ["6410405176059", "5901234123457", "4006381333931", "0000000000000"] {
            assert!(is_valid(code), "{code} должен быть валиден");
        }
    }

    #[test]
    fn altered_last_digit_is_rejected() {
        assert!(!is_valid("6410405176050"));
        assert_eq!(
            verify("6410405176050"),
            Err(BarcodeError::ChecksumMismatch { expected: 9, found: 0 })
        );
    }

    #[test]
    fn weights_start_with_one() {
        // единственная ненулевая цифра на позиции 0 (вес 1) и на позиции 1 (вес 3)
        let mut p = [0u8; 12];
        p[0] = 1;
        assert_eq!(check_digit(&p), 9);
        p = [0u8; 12];
        p[1] = 1;
        assert_eq!(check_digit(&p), 7);
    }

    #[test]
    fn wrong_shape_is_invalid_not_panic() {
        assert!(!is_valid(""));
        assert!(!is_valid("641040517605"));
        assert!(!is_valid("64104051760599"));
        assert!(!is_valid("641040517605X"));
        assert!(!is_valid("64104051 7605"));
    }
}
