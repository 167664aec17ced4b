// Методы чтения составных лексем для лексического анализатора

impl Lexer {
    /// Читает идентификатор или ключевое слово
    ///
    /// Накопленный текст ищется в таблице ключевых слов без учёта регистра;
    /// промах даёт `Identifier` с исходным написанием.
    pub(crate) fn read_identifier_or_keyword(&mut self, start_position: Position) -> Token {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                value.push(self.advance());
            } else {
                break;
            }
        }

        let token_type = lookup_ident(&value);
        Token::new(token_type, value, start_position)
    }

    /// Читает числовой литерал
    ///
    /// Поддерживает целые, десятичные с точкой, шестнадцатеричные (`0x...`)
    /// и экспоненциальную запись. Hex-числа не комбинируются с точкой и
    /// экспонентой. Значение токена — точная исходная подстрока.
    pub(crate) fn read_number(&mut self, start_position: Position) -> Token {
        let mut value = String::new();

        // Шестнадцатеричные числа (0x...)
        if self.peek() == Some('0')
            && matches!(self.peek_ahead(1), Some('x') | Some('X'))
        {
            value.push(self.advance());
            value.push(self.advance());
            while matches!(self.peek(), Some(ch) if ch.is_ascii_hexdigit()) {
                value.push(self.advance());
            }
            return Token::new(TokenType::Number, value, start_position);
        }

        // Целая часть
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            value.push(self.advance());
        }

        // Десятичная точка, только если за ней идёт цифра
        if self.peek() == Some('.')
            && matches!(self.peek_ahead(1), Some(ch) if ch.is_ascii_digit())
        {
            value.push(self.advance());
            while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                value.push(self.advance());
            }
        }

        // Экспоненциальная запись
        if matches!(self.peek(), Some('e') | Some('E')) {
            value.push(self.advance());
            if matches!(self.peek(), Some('+') | Some('-')) {
                value.push(self.advance());
            }
            while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                value.push(self.advance());
            }
        }

        Token::new(TokenType::Number, value, start_position)
    }

    /// Читает лексему в кавычках: строку `'...'` или идентификатор
    /// `"..."` / `` `...` ``
    ///
    /// Удвоенный разделитель внутри лексемы раскодируется в один символ
    /// разделителя, как и разделитель после обратного слэша. Незакрытая
    /// лексема молча обрывается на конце входа. Значение токена — содержимое
    /// без кавычек.
    pub(crate) fn read_quoted(
        &mut self,
        token_type: TokenType,
        delimiter: char,
        start_position: Position,
    ) -> Token {
        let mut value = String::new();
        self.advance(); // открывающая кавычка

        loop {
            let ch = match self.peek() {
                Some(ch) => ch,
                None => break,
            };

            if ch == delimiter {
                if self.peek_ahead(1) == Some(delimiter) {
                    // Удвоенный разделитель — экранированный символ
                    value.push(ch);
                    self.advance();
                    self.advance();
                    continue;
                }
                self.advance(); // закрывающая кавычка
                break;
            }

            if ch == '\\' && self.peek_ahead(1) == Some(delimiter) {
                self.advance(); // обратный слэш
                value.push(self.advance());
                continue;
            }

            value.push(self.advance());
        }

        Token::new(token_type, value, start_position)
    }

    /// Читает идентификатор в квадратных скобках `[...]`
    ///
    /// Экранирования нет: содержимое берётся дословно до первой `]` или до
    /// конца входа.
    pub(crate) fn read_bracket_identifier(&mut self, start_position: Position) -> Token {
        let mut value = String::new();
        self.advance(); // [

        while let Some(ch) = self.peek() {
            if ch == ']' {
                break;
            }
            value.push(self.advance());
        }

        if self.peek() == Some(']') {
            self.advance();
        }

        Token::new(TokenType::Identifier, value, start_position)
    }

    /// Читает именованный параметр `:name` или `$name`
    ///
    /// Значение токена включает ведущий сигил.
    pub(crate) fn read_named_parameter(&mut self, start_position: Position) -> Token {
        let mut value = String::new();
        value.push(self.advance()); // : или $

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                value.push(self.advance());
            } else {
                break;
            }
        }

        Token::new(TokenType::NamedParameter, value, start_position)
    }

    /// Пропускает однострочный комментарий `--` до конца строки
    pub(crate) fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Пропускает блочный комментарий `/* ... */`
    ///
    /// Незакрытый комментарий обрывается на конце входа без ошибки.
    pub(crate) fn skip_block_comment(&mut self) {
        self.advance(); // /
        self.advance(); // *

        while let Some(ch) = self.peek() {
            if ch == '*' && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                break;
            }
            self.advance();
        }
    }
}
