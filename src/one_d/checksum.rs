//! Контрольная цифра GS1 (взвешенная сумма по модулю 10).
//!
//! Алгоритм общий для EAN-13 и EAN-8:
//! 1) Строка цифр = полезная нагрузка + одна контрольная цифра в конце.
//! 2) Нагрузку обходим слева направо, индекс `i` с нуля; вес зависит от
//!    чётности `i` (см. [`Weights`]).
//! 3) Контрольная = `(10 - sum % 10) % 10`.
//!
//! Варианты отличаются только тем, какой чётности достаётся вес 3.

use crate::core::types::BarcodeError;

/// Веса для чётных и нечётных позиций нагрузки (индекс слева, с нуля).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Weights {
    pub even: u32,
    pub odd: u32,
}

impl Weights {
    #[inline]
    fn at(self, i: usize) -> u32 {
        if i % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Посчитать контрольную цифру для нагрузки (цифры 0..=9).
///
/// Каждое слагаемое берётся по модулю 10: результат тот же, а произвольные
/// веса и длинные нагрузки не переполняют `u32`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn check_digit(payload: &[u8], weights: Weights) -> u8 {
    let sum = payload.iter().enumerate().fold(0u32, |acc, (i, &d)| {
        (acc + (u32::from(d) % 10) * (weights.at(i) % 10)) % 10
    });
    ((10 - sum) % 10) as u8
}

/// Строка → вектор цифр.
///
/// # Errors
/// `NonDigit` на первом не-цифровом символе (позиция в символах).
pub fn digits(code: &str) -> Result<Vec<u8>, BarcodeError> {
    code.chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(BarcodeError::NonDigit { position, found: c })
        })
        .collect()
}

/// Полная проверка строки фиксированной длины `len`:
/// длина → цифры → контрольная сумма.
///
/// # Errors
/// Первое нарушение: `InvalidLength`, `NonDigit` или `ChecksumMismatch`.
pub fn verify(code: &str, len: usize, weights: Weights) -> Result<(), BarcodeError> {
    let n = code.chars().count();
    if n != len {
        return Err(BarcodeError::InvalidLength(n));
    }
    let ds = digits(code)?;
    let Some((&found, payload)) = ds.split_last() else {
        return Err(BarcodeError::InvalidLength(0));
    };
    let expected = check_digit(payload, weights);
    if expected == found {
        Ok(())
    } else {
        Err(BarcodeError::ChecksumMismatch { expected, found })
    }
}
