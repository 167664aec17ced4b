//! Бенчмарки лексера и парсера citrine-sql

use citrine_sql::{parse, Lexer, TokenType};
use criterion::{criterion_group, criterion_main, Criterion};

/// Полный прогон лексера по реалистичному запросу
fn lexer_benchmark(c: &mut Criterion) {
    let input = "SELECT users.name, users.email, profiles.bio \
                 FROM users \
                 INNER JOIN profiles ON users.id = profiles.user_id \
                 WHERE users.age >= 18 AND users.status = 'active' \
                 ORDER BY users.created_at DESC \
                 LIMIT 100 OFFSET 0;";

    c.bench_function("lexer_full_query", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(input);
            loop {
                let token = lexer.next_token();
                if token.token_type == TokenType::Eof {
                    break;
                }
            }
        });
    });
}

/// Поток из одиночных символов пунктуации
fn single_char_tokens_benchmark(c: &mut Criterion) {
    let input = ";;;,,,())***//%";

    c.bench_function("lexer_single_char_tokens", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(input);
            loop {
                let token = lexer.next_token();
                if token.token_type == TokenType::Eof {
                    break;
                }
            }
        });
    });
}

/// Поиск ключевых слов в статической таблице
fn keyword_lookup_benchmark(c: &mut Criterion) {
    let input = "SELECT FROM WHERE INSERT UPDATE DELETE CREATE TABLE TRUNCATE DROP ALTER";

    c.bench_function("lexer_keyword_lookup", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(input);
            loop {
                let token = lexer.next_token();
                if token.token_type == TokenType::Eof {
                    break;
                }
            }
        });
    });
}

/// Полный разбор запроса в AST
fn parse_benchmark(c: &mut Criterion) {
    let input = "SELECT id, name FROM users WHERE age >= 21 ORDER BY name DESC LIMIT 10";

    c.bench_function("parse_select", |b| {
        b.iter(|| parse(input).unwrap());
    });
}

criterion_group!(
    benches,
    lexer_benchmark,
    single_char_tokens_benchmark,
    keyword_lookup_benchmark,
    parse_benchmark
);
criterion_main!(benches);
