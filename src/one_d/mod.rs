pub mod checksum;
pub mod ean13;
pub mod ean8;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::types::{BarcodeError, Symbology};

/// Штрих-код GS1: закрытое множество вариантов, каждый держит строку цифр.
///
/// Проверенный путь создания — [`Barcode::try_parse`] / [`Barcode::parse`].
/// Варианты можно собрать и напрямую (`Barcode::Ean8("…".into())`), но такое
/// значение считается непроверенным, пока [`Barcode::is_valid`] не вернёт `true`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Barcode {
    Ean13(String),
    Ean8(String),
}

impl Barcode {
    /// Разобрать «сырую» строку: обрезать пробелы/переводы строк,
    /// классифицировать по длине (13 / 8) и проверить контрольную цифру.
    /// Любая неудача → `None`, причины не различаются.
    #[inline]
    #[must_use]
    pub fn try_parse(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// То же, что [`Barcode::try_parse`], но с причиной отказа.
    ///
    /// # Errors
    /// `InvalidLength`, если после обрезки не 8 и не 13 символов;
    /// `NonDigit` на первом не-цифровом символе; `ChecksumMismatch`.
    pub fn parse(raw: &str) -> Result<Self, BarcodeError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        let symbology = Symbology::from_len(len).ok_or(BarcodeError::InvalidLength(len))?;
        let candidate = Self::new_unchecked(symbology, trimmed);
        candidate.verify()?;
        Ok(candidate)
    }

    /// Собрать вариант по уже известной символогии без каких-либо проверок.
    #[inline]
    #[must_use]
    pub fn new_unchecked(symbology: Symbology, digits: impl Into<String>) -> Self {
        match symbology {
            Symbology::Ean13 => Barcode::Ean13(digits.into()),
            Symbology::Ean8 => Barcode::Ean8(digits.into()),
        }
    }

    /// Дописать контрольную цифру к нагрузке: 12 цифр → EAN-13, 7 → EAN-8.
    ///
    /// # Errors
    /// `InvalidPayloadLength` для другой длины, `NonDigit` для не-цифр.
    pub fn with_check_digit(payload: &str) -> Result<Self, BarcodeError> {
        let trimmed = payload.trim();
        let len = trimmed.chars().count();
        let symbology = Symbology::from_len(len + 1)
            .ok_or(BarcodeError::InvalidPayloadLength(len))?;
        let ds = checksum::digits(trimmed)?;
        let check = match symbology {
            Symbology::Ean13 => checksum::check_digit(&ds, ean13::WEIGHTS),
            Symbology::Ean8 => checksum::check_digit(&ds, ean8::WEIGHTS),
        };
        let mut code = String::with_capacity(len + 1);
        code.push_str(trimmed);
        code.push(char::from(b'0' + check));
        Ok(Self::new_unchecked(symbology, code))
    }

    /// Проверка длины, состава и контрольной цифры для текущего варианта.
    ///
    /// # Errors
    /// Первое нарушение: `InvalidLength`, `NonDigit` или `ChecksumMismatch`.
    pub fn verify(&self) -> Result<(), BarcodeError> {
        match self {
            Barcode::Ean13(code) => ean13::verify(code),
            Barcode::Ean8(code) => ean8::verify(code),
        }
    }

    /// Валиден ли код. Никогда не паникует: кривая длина или не-цифры
    /// (возможны при прямой сборке варианта) дают `false`.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Строка цифр как есть.
    #[inline]
    #[must_use]
    pub fn barcode_string(&self) -> &str {
        match self {
            Barcode::Ean13(code) | Barcode::Ean8(code) => code,
        }
    }

    #[inline]
    #[must_use]
    pub fn symbology(&self) -> Symbology {
        match self {
            Barcode::Ean13(_) => Symbology::Ean13,
            Barcode::Ean8(_) => Symbology::Ean8,
        }
    }

    /// `org.gs1.EAN-13` / `org.gs1.EAN-8`.
    #[inline]
    #[must_use]
    pub fn standard_name(&self) -> &'static str {
        self.symbology().standard_name()
    }

    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Barcode::Ean13(code) | Barcode::Ean8(code) => code,
        }
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.barcode_string())
    }
}

impl FromStr for Barcode {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Barcode {
    type Error = BarcodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Barcode {
    type Error = BarcodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Barcode> for String {
    fn from(b: Barcode) -> Self {
        b.into_string()
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        self.barcode_string()
    }
}
