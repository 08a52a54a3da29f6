#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Публичные модули
pub mod api;     // высокий уровень: настраиваемый Parser
pub mod core;    // общие типы (Symbology, BarcodeError)
pub mod prelude; // удобные re-export'ы

pub mod one_d;   // EAN-13 / EAN-8: значение Barcode и контрольные суммы

// Основные типы в корень
pub use crate::core::types::{BarcodeError, Symbology};
pub use crate::one_d::Barcode;

/// One-shot: разобрать строку со всеми символогиями.
#[inline]
#[must_use]
pub fn try_parse(raw: &str) -> Option<Barcode> {
    Barcode::try_parse(raw)
}

/// Разобрать пачку строк (по кандидату на строку) парсером по умолчанию.
#[inline]
#[must_use]
pub fn parse_all(input: &str) -> Vec<Barcode> {
    api::Parser::default().parse_all(input)
}
