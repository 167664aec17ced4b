//! Общие типы и утилиты для citrine-sql

pub mod error;

pub use error::{Error, Result};
