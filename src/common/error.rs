//! Обработка ошибок для citrine-sql

use thiserror::Error;

/// Основной тип ошибки для citrine-sql
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка парсинга SQL
    #[error("SQL parsing error: {message}")]
    SqlParsing { message: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для citrine-sql
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку SQL парсинга
    pub fn sql_parsing(message: impl Into<String>) -> Self {
        Self::SqlParsing {
            message: message.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
