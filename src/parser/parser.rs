//! Рекурсивный парсер SQL для citrine-sql
//!
//! Предиктивный разбор с окном из двух токенов (текущий и следующий).
//! Ошибки фатальны: первый неожиданный токен прерывает разбор, восстановления
//! нет. Грамматика выражений плоская — ровно один уровень сравнения, без
//! логических связок и приоритетов.

use crate::common::{Error, Result};
use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenType};

/// Парсер SQL операторов
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    peek_token: Token,
    /// Накопитель ошибок; в текущей грамматике не заполняется
    errors: Vec<String>,
}

/// Разбирает один SQL оператор из строки
///
/// Композиция лексера и парсера — основная точка входа библиотеки.
pub fn parse(sql: &str) -> Result<Statement> {
    let lexer = Lexer::new(sql);
    let mut parser = Parser::new(lexer);
    parser.parse_statement()
}

impl Parser {
    /// Создает новый парсер и заполняет окно просмотра
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Self {
            lexer,
            current_token,
            peek_token,
            errors: Vec::new(),
        }
    }

    /// Разбирает один SQL оператор
    pub fn parse_statement(&mut self) -> Result<Statement> {
        log::debug!(
            "разбор оператора, первый токен {:?}",
            self.current_token.token_type
        );

        match self.current_token.token_type {
            TokenType::Select => Ok(Statement::Select(self.parse_select_statement()?)),
            TokenType::Create => Ok(Statement::CreateTable(self.parse_create_statement()?)),
            TokenType::Insert => Ok(Statement::Insert(self.parse_insert_statement()?)),
            TokenType::Update => Ok(Statement::Update(self.parse_update_statement()?)),
            TokenType::Delete => Ok(Statement::Delete(self.parse_delete_statement()?)),
            _ => Err(Error::sql_parsing(format!(
                "неожиданный токен: {}",
                self.current_token.token_type
            ))),
        }
    }

    /// Возвращает накопленные ошибки
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    // === Операторы ===

    fn parse_select_statement(&mut self) -> Result<SelectStatement> {
        let pos = self.current_token.position.clone();

        if !self.expect_token(TokenType::Select) {
            return Err(Error::sql_parsing("ожидался SELECT"));
        }

        let fields = self.parse_select_fields()?;

        let from = if self.current_token.token_type == TokenType::From {
            self.next_token();
            Some(self.parse_table_ref()?)
        } else {
            None
        };

        let where_clause = if self.current_token.token_type == TokenType::Where {
            self.next_token();
            Some(self.parse_expression()?)
        } else {
            None
        };

        let order_by = if self.current_token.token_type == TokenType::Order {
            self.next_token();
            if !self.expect_token(TokenType::By) {
                return Err(Error::sql_parsing("ожидался BY после ORDER"));
            }
            self.parse_order_by()?
        } else {
            Vec::new()
        };

        let limit = if self.current_token.token_type == TokenType::Limit {
            self.next_token();
            Some(self.parse_limit_clause()?)
        } else {
            None
        };

        Ok(SelectStatement {
            pos,
            fields,
            from,
            where_clause,
            order_by,
            limit,
        })
    }

    /// Список полей SELECT: одиночная `*` или выражения через запятую
    fn parse_select_fields(&mut self) -> Result<Vec<Expression>> {
        let mut fields = Vec::new();

        if self.current_token.token_type == TokenType::Asterisk {
            fields.push(Expression::Identifier(Identifier::new(
                "*",
                self.current_token.position.clone(),
            )));
            self.next_token();
        } else {
            loop {
                fields.push(self.parse_expression()?);

                if self.current_token.token_type != TokenType::Comma {
                    break;
                }
                self.next_token();
            }
        }

        Ok(fields)
    }

    fn parse_create_statement(&mut self) -> Result<CreateTableStatement> {
        let pos = self.current_token.position.clone();

        if !self.expect_token(TokenType::Create) {
            return Err(Error::sql_parsing("ожидался CREATE"));
        }

        if !self.expect_token(TokenType::Table) {
            return Err(Error::sql_parsing("ожидался TABLE"));
        }

        if self.current_token.token_type != TokenType::Identifier {
            return Err(Error::sql_parsing("ожидалось имя таблицы"));
        }

        let table = Identifier::new(
            self.current_token.value.clone(),
            self.current_token.position.clone(),
        );
        self.next_token();

        if !self.expect_token(TokenType::LeftParen) {
            return Err(Error::sql_parsing("ожидалась ("));
        }

        let columns = self.parse_column_defs()?;

        if !self.expect_token(TokenType::RightParen) {
            return Err(Error::sql_parsing("ожидалась )"));
        }

        Ok(CreateTableStatement {
            pos,
            table,
            columns,
        })
    }

    fn parse_column_defs(&mut self) -> Result<Vec<ColumnDef>> {
        let mut columns = Vec::new();

        while self.current_token.token_type != TokenType::RightParen
            && self.current_token.token_type != TokenType::Eof
        {
            columns.push(self.parse_column_def()?);

            if self.current_token.token_type == TokenType::Comma {
                self.next_token();
            } else {
                break;
            }
        }

        Ok(columns)
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef> {
        if self.current_token.token_type != TokenType::Identifier {
            return Err(Error::sql_parsing("ожидалось имя колонки"));
        }

        let name = Identifier::new(
            self.current_token.value.clone(),
            self.current_token.position.clone(),
        );
        self.next_token();

        let type_name = if self.is_data_type() {
            let type_name = self.current_token.value.clone();
            self.next_token();
            Some(type_name)
        } else {
            None
        };

        let mut constraints = Vec::new();
        while self.is_constraint_keyword() {
            constraints.push(self.parse_constraint()?);
        }

        Ok(ColumnDef {
            name,
            type_name,
            constraints,
        })
    }

    fn parse_insert_statement(&mut self) -> Result<InsertStatement> {
        let pos = self.current_token.position.clone();

        if !self.expect_token(TokenType::Insert) {
            return Err(Error::sql_parsing("ожидался INSERT"));
        }

        // Повторный INSERT потребляется без ошибки
        if self.current_token.token_type == TokenType::Insert {
            self.next_token();
        }

        if self.current_token.token_type != TokenType::Identifier {
            return Err(Error::sql_parsing("ожидалось имя таблицы"));
        }

        let table = Identifier::new(
            self.current_token.value.clone(),
            self.current_token.position.clone(),
        );
        self.next_token();

        // Грамматика заканчивается на имени таблицы: списки колонок и VALUES
        // остаются пустыми
        Ok(InsertStatement {
            pos,
            table,
            columns: Vec::new(),
            values: Vec::new(),
        })
    }

    fn parse_update_statement(&mut self) -> Result<UpdateStatement> {
        let pos = self.current_token.position.clone();

        if !self.expect_token(TokenType::Update) {
            return Err(Error::sql_parsing("ожидался UPDATE"));
        }

        if self.current_token.token_type != TokenType::Identifier {
            return Err(Error::sql_parsing("ожидалось имя таблицы"));
        }

        let table = Identifier::new(
            self.current_token.value.clone(),
            self.current_token.position.clone(),
        );
        self.next_token();

        // Грамматика заканчивается на имени таблицы: SET и WHERE остаются
        // пустыми
        Ok(UpdateStatement {
            pos,
            table,
            set: Vec::new(),
            where_clause: None,
        })
    }

    fn parse_delete_statement(&mut self) -> Result<DeleteStatement> {
        let pos = self.current_token.position.clone();

        if !self.expect_token(TokenType::Delete) {
            return Err(Error::sql_parsing("ожидался DELETE"));
        }

        if !self.expect_token(TokenType::From) {
            return Err(Error::sql_parsing("ожидался FROM"));
        }

        if self.current_token.token_type != TokenType::Identifier {
            return Err(Error::sql_parsing("ожидалось имя таблицы"));
        }

        let from = Identifier::new(
            self.current_token.value.clone(),
            self.current_token.position.clone(),
        );
        self.next_token();

        let where_clause = if self.current_token.token_type == TokenType::Where {
            self.next_token();
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(DeleteStatement {
            pos,
            from,
            where_clause,
        })
    }

    // === Выражения ===

    fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_comparison()
    }

    /// Сравнение: первичное выражение с не более чем одним оператором
    /// сравнения. Цепочки и логические связки грамматикой не поддерживаются.
    fn parse_comparison(&mut self) -> Result<Expression> {
        let left = self.parse_primary()?;

        if self.is_comparison_operator() {
            let operator = self.current_token.value.clone();
            let pos = self.current_token.position.clone();
            self.next_token();

            let right = self.parse_primary()?;

            return Ok(Expression::Binary(BinaryExpression {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                pos,
            }));
        }

        Ok(left)
    }

    /// Первичное выражение: идентификатор, вызов функции, литерал или параметр
    ///
    /// Имена агрегатных функций лексер выдает как ключевые слова, поэтому
    /// они перечислены рядом с идентификатором. Скобка в следующем токене
    /// превращает имя в вызов функции.
    fn parse_primary(&mut self) -> Result<Expression> {
        match self.current_token.token_type {
            TokenType::Identifier
            | TokenType::Count
            | TokenType::Sum
            | TokenType::Avg
            | TokenType::Min
            | TokenType::Max => {
                let name = self.current_token.value.clone();
                let pos = self.current_token.position.clone();

                if self.peek_token.token_type == TokenType::LeftParen {
                    self.next_token(); // имя функции
                    self.next_token(); // (

                    let mut args = Vec::new();
                    if self.current_token.token_type != TokenType::RightParen {
                        loop {
                            args.push(self.parse_expression()?);

                            if self.current_token.token_type != TokenType::Comma {
                                break;
                            }
                            self.next_token();
                        }
                    }

                    if !self.expect_token(TokenType::RightParen) {
                        return Err(Error::sql_parsing("ожидалась )"));
                    }

                    return Ok(Expression::Function(FunctionCall { name, args, pos }));
                }

                self.next_token();
                Ok(Expression::Identifier(Identifier::new(name, pos)))
            }

            TokenType::String => {
                let value = self.current_token.value.clone();
                let pos = self.current_token.position.clone();
                self.next_token();
                Ok(Expression::String(StringLiteral { value, pos }))
            }

            TokenType::Number => {
                let value = self.current_token.value.clone();
                let pos = self.current_token.position.clone();
                self.next_token();
                Ok(Expression::Number(NumberLiteral { value, pos }))
            }

            TokenType::True | TokenType::False => {
                let value = self.current_token.token_type == TokenType::True;
                let pos = self.current_token.position.clone();
                self.next_token();
                Ok(Expression::Boolean(BooleanLiteral { value, pos }))
            }

            TokenType::Parameter => {
                let pos = self.current_token.position.clone();
                self.next_token();
                Ok(Expression::Parameter(Parameter { name: None, pos }))
            }

            TokenType::NamedParameter => {
                let name = self.current_token.value.clone();
                let pos = self.current_token.position.clone();
                self.next_token();
                Ok(Expression::Parameter(Parameter {
                    name: Some(name),
                    pos,
                }))
            }

            _ => Err(Error::sql_parsing(format!(
                "неожиданный токен: {}",
                self.current_token.token_type
            ))),
        }
    }

    // === Клаузулы ===

    /// Ссылка на таблицу с опциональным псевдонимом (голым или после AS)
    fn parse_table_ref(&mut self) -> Result<TableRef> {
        if self.current_token.token_type != TokenType::Identifier {
            return Err(Error::sql_parsing("ожидалось имя таблицы"));
        }

        let name = Identifier::new(
            self.current_token.value.clone(),
            self.current_token.position.clone(),
        );
        self.next_token();

        let alias = if self.current_token.token_type == TokenType::As {
            self.next_token();
            if self.current_token.token_type != TokenType::Identifier {
                return Err(Error::sql_parsing("ожидался псевдоним после AS"));
            }
            let alias = Identifier::new(
                self.current_token.value.clone(),
                self.current_token.position.clone(),
            );
            self.next_token();
            Some(alias)
        } else if self.current_token.token_type == TokenType::Identifier {
            let alias = Identifier::new(
                self.current_token.value.clone(),
                self.current_token.position.clone(),
            );
            self.next_token();
            Some(alias)
        } else {
            None
        };

        Ok(TableRef { name, alias })
    }

    /// Список ORDER BY
    ///
    /// ASC и DESC не ключевые слова: направление распознается по точному
    /// написанию голого идентификатора, иначе подразумевается ASC.
    fn parse_order_by(&mut self) -> Result<Vec<OrderByItem>> {
        let mut items = Vec::new();

        loop {
            let expression = self.parse_expression()?;

            let mut direction = OrderDirection::default();
            if self.current_token.token_type == TokenType::Identifier {
                match self.current_token.value.as_str() {
                    "ASC" => {
                        direction = OrderDirection::Asc;
                        self.next_token();
                    }
                    "DESC" => {
                        direction = OrderDirection::Desc;
                        self.next_token();
                    }
                    _ => {}
                }
            }

            items.push(OrderByItem {
                expression,
                direction,
            });

            if self.current_token.token_type != TokenType::Comma {
                break;
            }
            self.next_token();
        }

        Ok(items)
    }

    fn parse_limit_clause(&mut self) -> Result<LimitClause> {
        let count = self.parse_expression()?;

        let offset = if self.current_token.token_type == TokenType::Offset {
            self.next_token();
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(LimitClause { count, offset })
    }

    /// Ограничение колонки: PRIMARY KEY или NOT NULL
    ///
    /// UNIQUE и DEFAULT входят в число ключевых слов, запускающих цикл
    /// ограничений, но собственной ветки не имеют и падают в ошибку.
    fn parse_constraint(&mut self) -> Result<Constraint> {
        match self.current_token.token_type {
            TokenType::Primary => {
                let pos = self.current_token.position.clone();
                self.next_token();
                if !self.expect_token(TokenType::Key) {
                    return Err(Error::sql_parsing("ожидался KEY после PRIMARY"));
                }
                Ok(Constraint::PrimaryKey { pos })
            }
            TokenType::Not => {
                let pos = self.current_token.position.clone();
                self.next_token();
                if !self.expect_token(TokenType::Null) {
                    return Err(Error::sql_parsing("ожидался NULL после NOT"));
                }
                Ok(Constraint::NotNull { pos })
            }
            _ => Err(Error::sql_parsing(format!(
                "неизвестное ограничение: {}",
                self.current_token.token_type
            ))),
        }
    }

    // === Вспомогательные методы ===

    /// Сдвигает окно просмотра на один токен
    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Потребляет текущий токен, если он ожидаемого типа
    fn expect_token(&mut self, expected: TokenType) -> bool {
        if self.current_token.token_type == expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    fn is_data_type(&self) -> bool {
        matches!(
            self.current_token.token_type,
            TokenType::Integer
                | TokenType::Int
                | TokenType::Text
                | TokenType::Varchar
                | TokenType::Char
                | TokenType::Real
                | TokenType::Blob
                | TokenType::Boolean
                | TokenType::Datetime
                | TokenType::Timestamp
        )
    }

    fn is_constraint_keyword(&self) -> bool {
        matches!(
            self.current_token.token_type,
            TokenType::Primary | TokenType::Not | TokenType::Unique | TokenType::Default
        )
    }

    fn is_comparison_operator(&self) -> bool {
        matches!(
            self.current_token.token_type,
            TokenType::Equal
                | TokenType::NotEqual
                | TokenType::NotEqual2
                | TokenType::Greater
                | TokenType::Less
                | TokenType::GreaterEqual
                | TokenType::LessEqual
                | TokenType::Like
        )
    }
}
