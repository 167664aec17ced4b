// Методы лексического анализатора

impl Lexer {
    /// Возвращает следующий токен
    ///
    /// После конца входа продолжает возвращать `Eof` с пустым значением.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start_position = self.current_position.clone();

        let current_char = match self.peek() {
            Some(ch) => ch,
            None => return Token::new(TokenType::Eof, String::new(), start_position),
        };

        match current_char {
            '=' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenType::Equal, "==".to_string(), start_position)
                } else {
                    Token::new(TokenType::Equal, "=".to_string(), start_position)
                }
            }
            '>' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenType::GreaterEqual, ">=".to_string(), start_position)
                } else {
                    Token::new(TokenType::Greater, ">".to_string(), start_position)
                }
            }
            '<' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenType::LessEqual, "<=".to_string(), start_position)
                } else if self.peek() == Some('>') {
                    self.advance();
                    Token::new(TokenType::NotEqual2, "<>".to_string(), start_position)
                } else {
                    Token::new(TokenType::Less, "<".to_string(), start_position)
                }
            }
            '!' => {
                self.advance();
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenType::NotEqual, "!=".to_string(), start_position)
                } else {
                    Token::new(TokenType::Bang, "!".to_string(), start_position)
                }
            }
            '|' => {
                self.advance();
                if self.peek() == Some('|') {
                    self.advance();
                    Token::new(TokenType::Concat, "||".to_string(), start_position)
                } else {
                    Token::new(TokenType::Pipe, "|".to_string(), start_position)
                }
            }
            // Комментарий "--" имеет приоритет над оператором минус
            '-' => {
                if self.peek_ahead(1) == Some('-') {
                    self.skip_line_comment();
                    return self.next_token();
                }
                self.read_single_char_token(start_position)
            }
            // Комментарий "/*" имеет приоритет над оператором деления
            '/' => {
                if self.peek_ahead(1) == Some('*') {
                    self.skip_block_comment();
                    return self.next_token();
                }
                self.read_single_char_token(start_position)
            }
            // Число вида ".5" распознаётся раньше точки-пунктуации
            '.' => {
                if matches!(self.peek_ahead(1), Some(ch) if ch.is_ascii_digit()) {
                    self.read_number(start_position)
                } else {
                    self.read_single_char_token(start_position)
                }
            }
            '\'' => self.read_quoted(TokenType::String, '\'', start_position),
            '"' => self.read_quoted(TokenType::Identifier, '"', start_position),
            '`' => self.read_quoted(TokenType::Identifier, '`', start_position),
            '[' => self.read_bracket_identifier(start_position),
            '?' => {
                self.advance();
                Token::new(TokenType::Parameter, "?".to_string(), start_position)
            }
            ':' => {
                if matches!(self.peek_ahead(1), Some(ch) if is_letter(ch)) {
                    self.read_named_parameter(start_position)
                } else {
                    self.read_single_char_token(start_position)
                }
            }
            '$' => {
                if matches!(self.peek_ahead(1), Some(ch) if is_letter(ch) || ch.is_ascii_digit()) {
                    self.read_named_parameter(start_position)
                } else {
                    let ch = self.advance();
                    Token::new(TokenType::Illegal, ch.to_string(), start_position)
                }
            }
            ch if is_letter(ch) => self.read_identifier_or_keyword(start_position),
            ch if ch.is_ascii_digit() => self.read_number(start_position),
            _ => self.read_single_char_token(start_position),
        }
    }

    /// Возвращает все токены входного текста, включая завершающий `Eof`
    ///
    /// Результат совпадает с последовательными вызовами `next_token` на свежем
    /// лексере; комментарии в поток не попадают.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.token_type == TokenType::Eof;
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        log::debug!("лексер выдал {} токенов", tokens.len());
        tokens
    }

    /// Проверяет, достиг ли курсор конца входного текста
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Возвращает координаты следующего непрочитанного символа
    pub fn current_position(&self) -> Position {
        self.current_position.clone()
    }

    // === Вспомогательные методы ===

    /// Возвращает текущий символ и продвигает позицию
    pub(crate) fn advance(&mut self) -> char {
        if self.position >= self.input.len() {
            return '\0';
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += 1;

        ch
    }

    /// Возвращает следующий символ без продвижения позиции
    pub(crate) fn peek(&self) -> Option<char> {
        if self.position >= self.input.len() {
            None
        } else {
            Some(self.input[self.position])
        }
    }

    /// Возвращает символ на определенном расстоянии от текущей позиции
    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<char> {
        let pos = self.position + offset;
        if pos >= self.input.len() {
            None
        } else {
            Some(self.input[pos])
        }
    }

    /// Пропускает пробельные символы, включая юникодные пробелы
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Читает токен из одного символа по статической таблице пунктуации
    pub(crate) fn read_single_char_token(&mut self, start_position: Position) -> Token {
        let ch = self.advance();
        match SINGLE_CHAR_TOKENS.get(&ch) {
            Some(&(token_type, value)) => Token::new(token_type, value.to_string(), start_position),
            None => Token::new(TokenType::Illegal, ch.to_string(), start_position),
        }
    }
}

/// Буква в смысле грамматики идентификаторов: ASCII или юникодная буква,
/// либо подчеркивание
pub(crate) fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
