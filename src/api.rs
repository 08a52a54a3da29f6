// src/api.rs
//
// Верхнеуровневый API: настраиваемый парсер поверх `Barcode::parse`.
// Настройки — набор включённых символогий; всё остальное в `one_d`.

use tracing::{debug, trace};

use crate::prelude::*;

/// Настройки разбора.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Принимать EAN-13.
    pub ean13: bool,
    /// Принимать EAN-8.
    pub ean8: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ean13: true,
            ean8: true,
        }
    }
}

impl ParseOptions {
    /// Только одна симвология.
    #[must_use]
    pub fn only(symbology: Symbology) -> Self {
        Self {
            ean13: symbology == Symbology::Ean13,
            ean8: symbology == Symbology::Ean8,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self, symbology: Symbology) -> bool {
        match symbology {
            Symbology::Ean13 => self.ean13,
            Symbology::Ean8 => self.ean8,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Parser {
    opts: ParseOptions,
}

impl Parser {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_options(opts: ParseOptions) -> Self {
        Self { opts }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.opts
    }

    /// Включённые символогии в порядке [`Symbology::ALL`].
    #[must_use]
    pub fn symbologies(&self) -> Vec<Symbology> {
        Symbology::ALL
            .into_iter()
            .filter(|s| self.opts.is_enabled(*s))
            .collect()
    }

    /// Разобрать одну строку.
    ///
    /// # Errors
    /// Всё, что возвращает [`Barcode::parse`], плюс `Disabled`, если
    /// симвология выключена в настройках.
    pub fn parse(&self, raw: &str) -> Result<Barcode, BarcodeError> {
        let barcode = Barcode::parse(raw).inspect_err(|e| {
            debug!(raw, error = %e, "rejected barcode candidate");
        })?;
        let symbology = barcode.symbology();
        if !self.opts.is_enabled(symbology) {
            debug!(raw, %symbology, "symbology disabled");
            return Err(BarcodeError::Disabled(symbology));
        }
        trace!(code = barcode.barcode_string(), %symbology, "accepted barcode");
        Ok(barcode)
    }

    #[inline]
    #[must_use]
    pub fn try_parse(&self, raw: &str) -> Option<Barcode> {
        self.parse(raw).ok()
    }

    /// «Разбери всё»: по кандидату на строку, пустые строки пропускаются,
    /// невалидные отбрасываются.
    #[must_use]
    pub fn parse_all(&self, input: &str) -> Vec<Barcode> {
        let out: Vec<Barcode> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|l| self.try_parse(l))
            .collect();
        debug!(accepted = out.len(), "batch parsed");
        out
    }
}

/// Билдер парсера в стиле `Parser::builder().enable_ean8(false).build()`.
#[derive(Clone, Debug, Default)]
pub struct ParserBuilder {
    opts: ParseOptions,
}

impl ParserBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enable_ean13(mut self, on: bool) -> Self {
        self.opts.ean13 = on;
        self
    }

    #[must_use]
    pub fn enable_ean8(mut self, on: bool) -> Self {
        self.opts.ean8 = on;
        self
    }

    #[must_use]
    pub fn options(mut self, opts: ParseOptions) -> Self {
        self.opts = opts;
        self
    }

    #[must_use]
    pub fn build(self) -> Parser {
        Parser::with_options(self.opts)
    }
}

impl Parser {
    #[inline]
    #[must_use]
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }
}
