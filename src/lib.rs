//! citrine-sql - Лексер и парсер SQL на Rust
//!
//! Этот модуль предоставляет лексический анализатор и рекурсивный парсер SQL,
//! превращающие текст запроса в поток токенов и абстрактное синтаксическое
//! дерево для операторов SELECT, CREATE TABLE, INSERT, UPDATE и DELETE.
//!
//! # Пример
//!
//! ```
//! use citrine_sql::{parse, Statement};
//!
//! let stmt = parse("SELECT name FROM users WHERE age > 18").unwrap();
//! assert!(matches!(stmt, Statement::Select(_)));
//! ```

pub mod common;
pub mod parser;

pub use common::error::{Error, Result};
pub use parser::{parse, Lexer, Parser, Position, Token, TokenType};
pub use parser::{
    Assignment, BinaryExpression, BooleanLiteral, ColumnDef, Constraint, CreateTableStatement,
    DeleteStatement, Expression, FunctionCall, Identifier, InsertStatement, LimitClause,
    NumberLiteral, OrderByItem, OrderDirection, Parameter, SelectStatement, Statement,
    StringLiteral, TableRef, UpdateStatement,
};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
