//! Общие типы (симвология, ошибки разбора).

pub mod types;
