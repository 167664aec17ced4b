//! Токены для SQL лексера citrine-sql
//!
//! Определяет все типы токенов, которые может распознать лексический анализатор,
//! включая ключевые слова SQL, идентификаторы, литералы, операторы, параметры
//! и служебные токены (EOF, ILLEGAL). Таблицы поиска статические и read-only.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Позиция токена в исходном тексте (1-based строка и колонка)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен с позицией и значением
///
/// `value` хранит раскодированный текст для строк и идентификаторов в кавычках
/// (без кавычек, с разрешёнными экранированиями) и исходное написание для всего
/// остального: числа сохраняют свои цифры, включая префикс `0x` и экспоненту.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, position: Position) -> Self {
        Self {
            token_type,
            value,
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.token_type, self.value, self.position)
    }
}

/// Типы токенов SQL
///
/// Закрытое множество: ключевые слова, литералы, операторы, разделители,
/// параметры и служебные токены. ASC/DESC намеренно не являются ключевыми
/// словами — грамматика ORDER BY потребляет их как голые идентификаторы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === Ключевые слова SQL ===
    // Базовые операторы DML/DDL
    Select,
    From,
    Where,
    Insert,
    Update,
    Delete,
    Create,
    Table,
    Truncate,
    Drop,
    Alter,
    Index,

    // Ограничения и ключи
    Primary,
    Key,
    Foreign,
    References,
    Not,
    Null,
    Default,
    AutoIncrement,
    Unique,
    Check,
    Constraint,
    Collate,

    // Специфика SQLite
    Database,
    Schema,
    Cascade,
    Restrict,
    Conflict,
    Replace,
    Ignore,
    Fail,
    Abort,
    Rollback,
    Without,
    Rowid,

    // Pragma и обслуживание
    Pragma,
    Vacuum,
    Reindex,
    Analyze,
    Attach,
    Detach,
    Explain,
    Query,
    Plan,

    // Типы данных
    Int,
    Integer,
    Varchar,
    Text,
    Char,
    Boolean,
    Real,
    Blob,
    Datetime,
    Timestamp,

    // Клаузулы запросов
    Order,
    By,
    Group,
    Having,
    Limit,
    Offset,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Join,
    On,
    As,
    Distinct,
    Union,
    Intersect,
    Except,

    // Оконные функции
    Over,
    Partition,
    Window,
    Rows,
    Range,
    Unbounded,
    Preceding,
    Following,
    Current,
    Row,

    // Условные выражения
    Case,
    When,
    Then,
    Else,
    End,

    // Агрегатные функции
    Count,
    Sum,
    Avg,
    Max,
    Min,

    // Логические операторы
    And,
    Or,
    In,
    Like,
    Glob,
    Match,
    Regexp,
    Between,
    Is,
    Isnull,
    Notnull,
    Exists,

    // Транзакции
    Begin,
    Commit,
    Transaction,

    // Булевы литералы
    True,
    False,

    // === Идентификаторы и литералы ===
    /// Идентификатор (имя таблицы, колонки, etc.)
    Identifier,

    /// Строковый литерал
    String,

    /// Числовой литерал (целое, десятичное, hex, экспонента)
    Number,

    // === Параметры ===
    /// Позиционный параметр `?`
    Parameter,

    /// Именованный параметр `:name` или `$name`
    NamedParameter,

    // === Операторы сравнения ===
    Equal,        // = или ==
    Greater,      // >
    Less,         // <
    GreaterEqual, // >=
    LessEqual,    // <=
    NotEqual,     // !=
    NotEqual2,    // <>

    // === Арифметические операторы ===
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Concat,   // ||

    // === Разделители и символы ===
    Semicolon,    // ;
    Comma,        // ,
    LeftParen,    // (
    RightParen,   // )
    Dot,          // .
    Asterisk,     // *
    LeftBracket,  // [
    RightBracket, // ]
    Colon,        // :
    Pipe,         // |
    Bang,         // !

    // === Специальные токены ===
    /// Конец входного текста
    Eof,

    /// Нераспознанный символ
    Illegal,
}

impl TokenType {
    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Select
                | TokenType::From
                | TokenType::Where
                | TokenType::Insert
                | TokenType::Update
                | TokenType::Delete
                | TokenType::Create
                | TokenType::Table
                | TokenType::Truncate
                | TokenType::Drop
                | TokenType::Alter
                | TokenType::Index
                | TokenType::Primary
                | TokenType::Key
                | TokenType::Foreign
                | TokenType::References
                | TokenType::Not
                | TokenType::Null
                | TokenType::Default
                | TokenType::AutoIncrement
                | TokenType::Unique
                | TokenType::Check
                | TokenType::Constraint
                | TokenType::Collate
                | TokenType::Database
                | TokenType::Schema
                | TokenType::Cascade
                | TokenType::Restrict
                | TokenType::Conflict
                | TokenType::Replace
                | TokenType::Ignore
                | TokenType::Fail
                | TokenType::Abort
                | TokenType::Rollback
                | TokenType::Without
                | TokenType::Rowid
                | TokenType::Pragma
                | TokenType::Vacuum
                | TokenType::Reindex
                | TokenType::Analyze
                | TokenType::Attach
                | TokenType::Detach
                | TokenType::Explain
                | TokenType::Query
                | TokenType::Plan
                | TokenType::Int
                | TokenType::Integer
                | TokenType::Varchar
                | TokenType::Text
                | TokenType::Char
                | TokenType::Boolean
                | TokenType::Real
                | TokenType::Blob
                | TokenType::Datetime
                | TokenType::Timestamp
                | TokenType::Order
                | TokenType::By
                | TokenType::Group
                | TokenType::Having
                | TokenType::Limit
                | TokenType::Offset
                | TokenType::Inner
                | TokenType::Left
                | TokenType::Right
                | TokenType::Full
                | TokenType::Outer
                | TokenType::Cross
                | TokenType::Join
                | TokenType::On
                | TokenType::As
                | TokenType::Distinct
                | TokenType::Union
                | TokenType::Intersect
                | TokenType::Except
                | TokenType::Over
                | TokenType::Partition
                | TokenType::Window
                | TokenType::Rows
                | TokenType::Range
                | TokenType::Unbounded
                | TokenType::Preceding
                | TokenType::Following
                | TokenType::Current
                | TokenType::Row
                | TokenType::Case
                | TokenType::When
                | TokenType::Then
                | TokenType::Else
                | TokenType::End
                | TokenType::Count
                | TokenType::Sum
                | TokenType::Avg
                | TokenType::Max
                | TokenType::Min
                | TokenType::And
                | TokenType::Or
                | TokenType::In
                | TokenType::Like
                | TokenType::Glob
                | TokenType::Match
                | TokenType::Regexp
                | TokenType::Between
                | TokenType::Is
                | TokenType::Isnull
                | TokenType::Notnull
                | TokenType::Exists
                | TokenType::Begin
                | TokenType::Commit
                | TokenType::Transaction
                | TokenType::True
                | TokenType::False
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::String | TokenType::Number | TokenType::Identifier
        )
    }

    /// Проверяет, является ли токен оператором
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Equal
                | TokenType::NotEqual
                | TokenType::NotEqual2
                | TokenType::Greater
                | TokenType::Less
                | TokenType::GreaterEqual
                | TokenType::LessEqual
                | TokenType::Plus
                | TokenType::Minus
                | TokenType::Multiply
                | TokenType::Divide
                | TokenType::Modulo
                | TokenType::Concat
        )
    }

    /// Проверяет, является ли токен разделителем
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenType::Semicolon
                | TokenType::Comma
                | TokenType::LeftParen
                | TokenType::RightParen
                | TokenType::Dot
                | TokenType::Asterisk
                | TokenType::LeftBracket
                | TokenType::RightBracket
                | TokenType::Colon
                | TokenType::Pipe
                | TokenType::Bang
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Select => "SELECT",
            TokenType::From => "FROM",
            TokenType::Where => "WHERE",
            TokenType::Insert => "INSERT",
            TokenType::Update => "UPDATE",
            TokenType::Delete => "DELETE",
            TokenType::Create => "CREATE",
            TokenType::Table => "TABLE",
            TokenType::Truncate => "TRUNCATE",
            TokenType::Drop => "DROP",
            TokenType::Alter => "ALTER",
            TokenType::Index => "INDEX",
            TokenType::Primary => "PRIMARY",
            TokenType::Key => "KEY",
            TokenType::Foreign => "FOREIGN",
            TokenType::References => "REFERENCES",
            TokenType::Not => "NOT",
            TokenType::Null => "NULL",
            TokenType::Default => "DEFAULT",
            TokenType::AutoIncrement => "AUTOINCREMENT",
            TokenType::Unique => "UNIQUE",
            TokenType::Check => "CHECK",
            TokenType::Constraint => "CONSTRAINT",
            TokenType::Collate => "COLLATE",
            TokenType::Database => "DATABASE",
            TokenType::Schema => "SCHEMA",
            TokenType::Cascade => "CASCADE",
            TokenType::Restrict => "RESTRICT",
            TokenType::Conflict => "CONFLICT",
            TokenType::Replace => "REPLACE",
            TokenType::Ignore => "IGNORE",
            TokenType::Fail => "FAIL",
            TokenType::Abort => "ABORT",
            TokenType::Rollback => "ROLLBACK",
            TokenType::Without => "WITHOUT",
            TokenType::Rowid => "ROWID",
            TokenType::Pragma => "PRAGMA",
            TokenType::Vacuum => "VACUUM",
            TokenType::Reindex => "REINDEX",
            TokenType::Analyze => "ANALYZE",
            TokenType::Attach => "ATTACH",
            TokenType::Detach => "DETACH",
            TokenType::Explain => "EXPLAIN",
            TokenType::Query => "QUERY",
            TokenType::Plan => "PLAN",
            TokenType::Int => "INT",
            TokenType::Integer => "INTEGER",
            TokenType::Varchar => "VARCHAR",
            TokenType::Text => "TEXT",
            TokenType::Char => "CHAR",
            TokenType::Boolean => "BOOLEAN",
            TokenType::Real => "REAL",
            TokenType::Blob => "BLOB",
            TokenType::Datetime => "DATETIME",
            TokenType::Timestamp => "TIMESTAMP",
            TokenType::Order => "ORDER",
            TokenType::By => "BY",
            TokenType::Group => "GROUP",
            TokenType::Having => "HAVING",
            TokenType::Limit => "LIMIT",
            TokenType::Offset => "OFFSET",
            TokenType::Inner => "INNER",
            TokenType::Left => "LEFT",
            TokenType::Right => "RIGHT",
            TokenType::Full => "FULL",
            TokenType::Outer => "OUTER",
            TokenType::Cross => "CROSS",
            TokenType::Join => "JOIN",
            TokenType::On => "ON",
            TokenType::As => "AS",
            TokenType::Distinct => "DISTINCT",
            TokenType::Union => "UNION",
            TokenType::Intersect => "INTERSECT",
            TokenType::Except => "EXCEPT",
            TokenType::Over => "OVER",
            TokenType::Partition => "PARTITION",
            TokenType::Window => "WINDOW",
            TokenType::Rows => "ROWS",
            TokenType::Range => "RANGE",
            TokenType::Unbounded => "UNBOUNDED",
            TokenType::Preceding => "PRECEDING",
            TokenType::Following => "FOLLOWING",
            TokenType::Current => "CURRENT",
            TokenType::Row => "ROW",
            TokenType::Case => "CASE",
            TokenType::When => "WHEN",
            TokenType::Then => "THEN",
            TokenType::Else => "ELSE",
            TokenType::End => "END",
            TokenType::Count => "COUNT",
            TokenType::Sum => "SUM",
            TokenType::Avg => "AVG",
            TokenType::Max => "MAX",
            TokenType::Min => "MIN",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::In => "IN",
            TokenType::Like => "LIKE",
            TokenType::Glob => "GLOB",
            TokenType::Match => "MATCH",
            TokenType::Regexp => "REGEXP",
            TokenType::Between => "BETWEEN",
            TokenType::Is => "IS",
            TokenType::Isnull => "ISNULL",
            TokenType::Notnull => "NOTNULL",
            TokenType::Exists => "EXISTS",
            TokenType::Begin => "BEGIN",
            TokenType::Commit => "COMMIT",
            TokenType::Transaction => "TRANSACTION",
            TokenType::True => "TRUE",
            TokenType::False => "FALSE",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::Parameter => "PARAMETER",
            TokenType::NamedParameter => "NAMED_PARAMETER",
            TokenType::Equal => "=",
            TokenType::Greater => ">",
            TokenType::Less => "<",
            TokenType::GreaterEqual => ">=",
            TokenType::LessEqual => "<=",
            TokenType::NotEqual => "!=",
            TokenType::NotEqual2 => "<>",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Multiply => "*",
            TokenType::Divide => "/",
            TokenType::Modulo => "%",
            TokenType::Concat => "||",
            TokenType::Semicolon => ";",
            TokenType::Comma => ",",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::Dot => ".",
            TokenType::Asterisk => "*",
            TokenType::LeftBracket => "[",
            TokenType::RightBracket => "]",
            TokenType::Colon => ":",
            TokenType::Pipe => "|",
            TokenType::Bang => "!",
            TokenType::Eof => "EOF",
            TokenType::Illegal => "ILLEGAL",
        };
        write!(f, "{}", name)
    }
}

lazy_static! {
    /// Карта ключевых слов для поиска без учёта регистра.
    /// Инициализируется один раз, далее только читается — безопасна для
    /// одновременного чтения из нескольких потоков.
    pub static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();

        // Базовые операторы SQL
        map.insert("SELECT", TokenType::Select);
        map.insert("FROM", TokenType::From);
        map.insert("WHERE", TokenType::Where);
        map.insert("INSERT", TokenType::Insert);
        map.insert("UPDATE", TokenType::Update);
        map.insert("DELETE", TokenType::Delete);
        map.insert("CREATE", TokenType::Create);
        map.insert("TABLE", TokenType::Table);
        map.insert("TRUNCATE", TokenType::Truncate);
        map.insert("DROP", TokenType::Drop);
        map.insert("ALTER", TokenType::Alter);
        map.insert("INDEX", TokenType::Index);

        // Ограничения и ключи
        map.insert("PRIMARY", TokenType::Primary);
        map.insert("KEY", TokenType::Key);
        map.insert("FOREIGN", TokenType::Foreign);
        map.insert("REFERENCES", TokenType::References);
        map.insert("NOT", TokenType::Not);
        map.insert("NULL", TokenType::Null);
        map.insert("DEFAULT", TokenType::Default);
        map.insert("AUTO_INCREMENT", TokenType::AutoIncrement);
        map.insert("AUTOINCREMENT", TokenType::AutoIncrement);
        map.insert("UNIQUE", TokenType::Unique);
        map.insert("CHECK", TokenType::Check);
        map.insert("CONSTRAINT", TokenType::Constraint);
        map.insert("COLLATE", TokenType::Collate);

        // Специфика SQLite
        map.insert("DATABASE", TokenType::Database);
        map.insert("SCHEMA", TokenType::Schema);
        map.insert("CASCADE", TokenType::Cascade);
        map.insert("RESTRICT", TokenType::Restrict);
        map.insert("CONFLICT", TokenType::Conflict);
        map.insert("REPLACE", TokenType::Replace);
        map.insert("IGNORE", TokenType::Ignore);
        map.insert("FAIL", TokenType::Fail);
        map.insert("ABORT", TokenType::Abort);
        map.insert("ROLLBACK", TokenType::Rollback);
        map.insert("WITHOUT", TokenType::Without);
        map.insert("ROWID", TokenType::Rowid);

        // Pragma и обслуживание
        map.insert("PRAGMA", TokenType::Pragma);
        map.insert("VACUUM", TokenType::Vacuum);
        map.insert("REINDEX", TokenType::Reindex);
        map.insert("ANALYZE", TokenType::Analyze);
        map.insert("ATTACH", TokenType::Attach);
        map.insert("DETACH", TokenType::Detach);
        map.insert("EXPLAIN", TokenType::Explain);
        map.insert("QUERY", TokenType::Query);
        map.insert("PLAN", TokenType::Plan);

        // Типы данных
        map.insert("INT", TokenType::Int);
        map.insert("INTEGER", TokenType::Integer);
        map.insert("VARCHAR", TokenType::Varchar);
        map.insert("TEXT", TokenType::Text);
        map.insert("CHAR", TokenType::Char);
        map.insert("BOOLEAN", TokenType::Boolean);
        map.insert("REAL", TokenType::Real);
        map.insert("BLOB", TokenType::Blob);
        map.insert("DATETIME", TokenType::Datetime);
        map.insert("TIMESTAMP", TokenType::Timestamp);

        // Клаузулы запросов
        map.insert("ORDER", TokenType::Order);
        map.insert("BY", TokenType::By);
        map.insert("GROUP", TokenType::Group);
        map.insert("HAVING", TokenType::Having);
        map.insert("LIMIT", TokenType::Limit);
        map.insert("OFFSET", TokenType::Offset);
        map.insert("INNER", TokenType::Inner);
        map.insert("LEFT", TokenType::Left);
        map.insert("RIGHT", TokenType::Right);
        map.insert("FULL", TokenType::Full);
        map.insert("OUTER", TokenType::Outer);
        map.insert("CROSS", TokenType::Cross);
        map.insert("JOIN", TokenType::Join);
        map.insert("ON", TokenType::On);
        map.insert("AS", TokenType::As);
        map.insert("DISTINCT", TokenType::Distinct);
        map.insert("UNION", TokenType::Union);
        map.insert("INTERSECT", TokenType::Intersect);
        map.insert("EXCEPT", TokenType::Except);

        // Оконные функции
        map.insert("OVER", TokenType::Over);
        map.insert("PARTITION", TokenType::Partition);
        map.insert("WINDOW", TokenType::Window);
        map.insert("ROWS", TokenType::Rows);
        map.insert("RANGE", TokenType::Range);
        map.insert("UNBOUNDED", TokenType::Unbounded);
        map.insert("PRECEDING", TokenType::Preceding);
        map.insert("FOLLOWING", TokenType::Following);
        map.insert("CURRENT", TokenType::Current);
        map.insert("ROW", TokenType::Row);

        // Условные выражения
        map.insert("CASE", TokenType::Case);
        map.insert("WHEN", TokenType::When);
        map.insert("THEN", TokenType::Then);
        map.insert("ELSE", TokenType::Else);
        map.insert("END", TokenType::End);

        // Агрегатные функции
        map.insert("COUNT", TokenType::Count);
        map.insert("SUM", TokenType::Sum);
        map.insert("AVG", TokenType::Avg);
        map.insert("MAX", TokenType::Max);
        map.insert("MIN", TokenType::Min);

        // Логические операторы
        map.insert("AND", TokenType::And);
        map.insert("OR", TokenType::Or);
        map.insert("IN", TokenType::In);
        map.insert("LIKE", TokenType::Like);
        map.insert("GLOB", TokenType::Glob);
        map.insert("MATCH", TokenType::Match);
        map.insert("REGEXP", TokenType::Regexp);
        map.insert("BETWEEN", TokenType::Between);
        map.insert("IS", TokenType::Is);
        map.insert("ISNULL", TokenType::Isnull);
        map.insert("NOTNULL", TokenType::Notnull);
        map.insert("EXISTS", TokenType::Exists);

        // Транзакции
        map.insert("BEGIN", TokenType::Begin);
        map.insert("COMMIT", TokenType::Commit);
        map.insert("TRANSACTION", TokenType::Transaction);

        // Булевы литералы
        map.insert("TRUE", TokenType::True);
        map.insert("FALSE", TokenType::False);

        map
    };

    /// Карта одиночных символов пунктуации
    pub static ref SINGLE_CHAR_TOKENS: HashMap<char, (TokenType, &'static str)> = {
        let mut map = HashMap::new();
        map.insert(';', (TokenType::Semicolon, ";"));
        map.insert(',', (TokenType::Comma, ","));
        map.insert('(', (TokenType::LeftParen, "("));
        map.insert(')', (TokenType::RightParen, ")"));
        map.insert('.', (TokenType::Dot, "."));
        map.insert('*', (TokenType::Asterisk, "*"));
        map.insert('+', (TokenType::Plus, "+"));
        map.insert('-', (TokenType::Minus, "-"));
        map.insert('/', (TokenType::Divide, "/"));
        map.insert('%', (TokenType::Modulo, "%"));
        map.insert('[', (TokenType::LeftBracket, "["));
        map.insert(']', (TokenType::RightBracket, "]"));
        map.insert(':', (TokenType::Colon, ":"));
        map.insert('|', (TokenType::Pipe, "|"));
        map.insert('!', (TokenType::Bang, "!"));
        map
    };
}

/// Ищет идентификатор в таблице ключевых слов (без учёта регистра)
pub fn lookup_ident(ident: &str) -> TokenType {
    KEYWORDS
        .get(ident.to_uppercase().as_str())
        .copied()
        .unwrap_or(TokenType::Identifier)
}
