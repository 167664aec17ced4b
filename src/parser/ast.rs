//! Абстрактное синтаксическое дерево SQL для citrine-sql
//!
//! Чистые значения без поведения, кроме позиции и канонического строкового
//! представления. Statement и Expression — закрытые множества вариантов:
//! новая форма добавляется в перечисление и обрабатывается исчерпывающим
//! match во всех потребителях.

use crate::parser::token::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Основной узел AST для SQL операций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// SELECT запрос
    Select(SelectStatement),
    /// CREATE TABLE операция
    CreateTable(CreateTableStatement),
    /// INSERT операция
    Insert(InsertStatement),
    /// UPDATE операция
    Update(UpdateStatement),
    /// DELETE операция
    Delete(DeleteStatement),
}

impl Statement {
    /// Позиция начала оператора в исходном тексте
    pub fn position(&self) -> &Position {
        match self {
            Statement::Select(stmt) => &stmt.pos,
            Statement::CreateTable(stmt) => &stmt.pos,
            Statement::Insert(stmt) => &stmt.pos,
            Statement::Update(stmt) => &stmt.pos,
            Statement::Delete(stmt) => &stmt.pos,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statement::Select(_) => "SELECT",
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// SELECT запрос
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub pos: Position,
    pub fields: Vec<Expression>,
    pub from: Option<TableRef>,
    pub where_clause: Option<Expression>,
    pub order_by: Vec<OrderByItem>,
    pub limit: Option<LimitClause>,
}

/// CREATE TABLE операция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    pub pos: Position,
    pub table: Identifier,
    pub columns: Vec<ColumnDef>,
}

/// INSERT операция
///
/// Грамматика останавливается после имени таблицы: список колонок и строки
/// VALUES представлены в узле, но парсером не заполняются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub pos: Position,
    pub table: Identifier,
    pub columns: Vec<Identifier>,
    pub values: Vec<Vec<Expression>>,
}

/// UPDATE операция
///
/// Грамматика останавливается после имени таблицы: присваивания SET и WHERE
/// представлены в узле, но парсером не заполняются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatement {
    pub pos: Position,
    pub table: Identifier,
    pub set: Vec<Assignment>,
    pub where_clause: Option<Expression>,
}

/// DELETE операция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStatement {
    pub pos: Position,
    pub from: Identifier,
    pub where_clause: Option<Expression>,
}

/// SQL выражение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Идентификатор (колонка, `*` в списке SELECT)
    Identifier(Identifier),
    /// Строковый литерал
    String(StringLiteral),
    /// Числовой литерал (хранится как исходный текст)
    Number(NumberLiteral),
    /// Булевый литерал
    Boolean(BooleanLiteral),
    /// Бинарная операция сравнения (ровно один уровень)
    Binary(BinaryExpression),
    /// Вызов функции
    Function(FunctionCall),
    /// Параметр `?`, `:name` или `$name`
    Parameter(Parameter),
}

impl Expression {
    /// Позиция начала выражения в исходном тексте
    pub fn position(&self) -> &Position {
        match self {
            Expression::Identifier(expr) => &expr.pos,
            Expression::String(expr) => &expr.pos,
            Expression::Number(expr) => &expr.pos,
            Expression::Boolean(expr) => &expr.pos,
            Expression::Binary(expr) => &expr.pos,
            Expression::Function(expr) => &expr.pos,
            Expression::Parameter(expr) => &expr.pos,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::String(expr) => write!(f, "{}", expr),
            Expression::Number(expr) => write!(f, "{}", expr),
            Expression::Boolean(expr) => write!(f, "{}", expr),
            Expression::Binary(expr) => write!(f, "{}", expr),
            Expression::Function(expr) => write!(f, "{}", expr),
            Expression::Parameter(expr) => write!(f, "{}", expr),
        }
    }
}

/// Идентификатор (имя таблицы, колонки, функции)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub pos: Position,
}

impl Identifier {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Строковый литерал (значение без кавычек)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub pos: Position,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.value)
    }
}

/// Числовой литерал
///
/// Значение хранится как исходное написание: преобразование в число и
/// округление — забота вызывающего кода.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
    pub pos: Position,
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Булевый литерал
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub pos: Position,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.value { "TRUE" } else { "FALSE" })
    }
}

/// Бинарная операция
///
/// Оператор хранится в исходном написании (`=`, `!=`, `<>`, `LIKE`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
    pub pos: Position,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// Вызов функции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expression>,
    pub pos: Position,
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.name)
    }
}

/// Параметр-заполнитель
///
/// Отсутствующее имя означает позиционный параметр `?`; именованные параметры
/// хранят имя вместе с сигилом (`:name`, `$name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Option<String>,
    pub pos: Position,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "?"),
        }
    }
}

/// Ссылка на таблицу в FROM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: Identifier,
    pub alias: Option<Identifier>,
}

/// Определение колонки в CREATE TABLE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: Identifier,
    pub type_name: Option<String>,
    pub constraints: Vec<Constraint>,
}

/// Ограничение колонки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    PrimaryKey { pos: Position },
    NotNull { pos: Position },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Constraint::PrimaryKey { .. } => "PRIMARY KEY",
            Constraint::NotNull { .. } => "NOT NULL",
        };
        write!(f, "{}", name)
    }
}

/// Присваивание в UPDATE SET
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: Identifier,
    pub value: Expression,
}

/// Элемент списка ORDER BY
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByItem {
    pub expression: Expression,
    pub direction: OrderDirection,
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Клаузула LIMIT с опциональным OFFSET
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitClause {
    pub count: Expression,
    pub offset: Option<Expression>,
}
