//! Лексический анализатор SQL для citrine-sql
//!
//! Преобразует входной SQL текст в последовательность токенов для дальнейшего
//! парсинга. Поддерживает ключевые слова, идентификаторы (включая кавычки
//! трёх стилей), строковые и числовые литералы, операторы из одного и двух
//! символов, параметры и комментарии.
//!
//! Лексический уровень никогда не возвращает ошибку: нераспознанный символ
//! становится токеном `Illegal`, незакрытая строка или блочный комментарий
//! молча обрываются на конце входа.

use crate::parser::token::{lookup_ident, Position, Token, TokenType, SINGLE_CHAR_TOKENS};

/// Лексический анализатор SQL
///
/// Держит изменяемое состояние курсора и не предназначен для одновременного
/// использования из нескольких потоков: на каждый разбор создаётся свой
/// экземпляр.
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Координаты следующего непрочитанного символа
    current_position: Position,
}

impl Lexer {
    /// Создает новый лексический анализатор
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
        }
    }
}

// Подключаем методы из отдельных файлов
include!("lexer_methods.rs");
include!("lexer_readers.rs");
