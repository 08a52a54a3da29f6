// src/core/types.rs
//
// Общие типы, независимые от конкретной символогии.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Тип штрих-кода (симвология).
///
/// Значение передаётся внешнему слою (рендеринг, распознавание), который
/// ждёт «тег символогии». Маппинг в обе стороны — [`Symbology::tag`] и
/// [`Symbology::from_tag`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Symbology {
    Ean13,
    Ean8,
}

impl Symbology {
    /// Все поддерживаемые символогии.
    pub const ALL: [Symbology; 2] = [Symbology::Ean8, Symbology::Ean13];

    /// Фиксированная длина строки цифр (вместе с контрольной).
    #[inline]
    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Symbology::Ean13 => 13,
            Symbology::Ean8 => 8,
        }
    }

    /// Имя по стандарту GS1.
    #[inline]
    #[must_use]
    pub const fn standard_name(self) -> &'static str {
        match self {
            Symbology::Ean13 => "org.gs1.EAN-13",
            Symbology::Ean8 => "org.gs1.EAN-8",
        }
    }

    /// Тег символогии для внешних API.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
        }
    }

    /// Обратный маппинг тега. Принимает `EAN-13`, `EAN13` и имя GS1,
    /// регистр не важен.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let t = tag.trim();
        Self::ALL.into_iter().find(|s| {
            t.eq_ignore_ascii_case(s.tag())
                || t.eq_ignore_ascii_case(s.standard_name())
                || t.eq_ignore_ascii_case(&s.tag().replace('-', ""))
        })
    }

    /// Классификация по длине: 13 → EAN-13, 8 → EAN-8.
    #[inline]
    #[must_use]
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            13 => Some(Symbology::Ean13),
            8 => Some(Symbology::Ean8),
            _ => None,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Symbology {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| BarcodeError::UnknownSymbology(s.to_string()))
    }
}

impl TryFrom<String> for Symbology {
    type Error = BarcodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Symbology> for &'static str {
    fn from(s: Symbology) -> Self {
        s.tag()
    }
}

/// Причины, по которым строка не стала штрих-кодом.
///
/// `Barcode::try_parse` их не различает (просто `None`); подробный путь —
/// `Barcode::parse`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BarcodeError {
    /// Длина после обрезки пробелов не 8 и не 13.
    #[error("invalid length {0}: expected 8 (EAN-8) or 13 (EAN-13) digits")]
    InvalidLength(usize),

    /// Полезная нагрузка для дописывания контрольной цифры не 7 и не 12 цифр.
    #[error("invalid payload length {0}: expected 7 (EAN-8) or 12 (EAN-13) digits")]
    InvalidPayloadLength(usize),

    /// Встретился не-цифровой символ.
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    /// Контрольная цифра не сошлась.
    #[error("checksum mismatch: expected check digit {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },

    /// Симвология распознана, но выключена в настройках парсера.
    #[error("symbology {0} is disabled")]
    Disabled(Symbology),

    /// Неизвестный тег символогии.
    #[error("unknown symbology {0:?}")]
    UnknownSymbology(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_mapping_is_two_way() {
        for s in Symbology::ALL {
            assert_eq!(Symbology::from_tag(s.tag()), Some(s));
            assert_eq!(Symbology::from_tag(s.standard_name()), Some(s));
            assert_eq!(s.to_string().parse::<Symbology>(), Ok(s));
        }
    }

    #[test]
    fn from_tag_accepts_compact_and_lowercase() {
        assert_eq!(Symbology::from_tag("ean13"), Some(Symbology::Ean13));
        assert_eq!(Symbology::from_tag(" EAN8 "), Some(Symbology::Ean8));
        assert_eq!(Symbology::from_tag("upc-a"), None);
        assert_eq!(
            "qr".parse::<Symbology>(),
            Err(BarcodeError::UnknownSymbology("qr".into()))
        );
    }

    #[test]
    fn standard_names_and_lengths() {
        assert_eq!(Symbology::Ean13.standard_name(), "org.gs1.EAN-13");
        assert_eq!(Symbology::Ean8.standard_name(), "org.gs1.EAN-8");
        assert_eq!(Symbology::Ean13.digit_count(), 13);
        assert_eq!(Symbology::Ean8.digit_count(), 8);
        assert_eq!(Symbology::from_len(13), Some(Symbology::Ean13));
        assert_eq!(Symbology::from_len(8), Some(Symbology::Ean8));
        assert_eq!(Symbology::from_len(12), None);
    }
}
