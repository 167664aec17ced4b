//! Парсер SQL для citrine-sql

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use ast::*;
pub use lexer::Lexer;
pub use parser::{parse, Parser};
pub use token::{Position, Token, TokenType};
