//! Удобные re-export'ы: `use barcodekit::prelude::*;`

pub use crate::api::{ParseOptions, Parser, ParserBuilder};
pub use crate::core::types::{BarcodeError, Symbology};
pub use crate::one_d::Barcode;
