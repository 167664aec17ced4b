//! Интеграционные тесты для citrine-sql
//!
//! Проверяют публичный API библиотеки: лексер, парсер и сериализацию
//! разобранных деревьев.

use citrine_sql::{parse, Expression, Lexer, Result, Statement, TokenType};

#[test]
fn test_lexer_public_api() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut lexer = Lexer::new("SELECT id FROM t;");
    let tokens = lexer.tokenize();

    assert_eq!(tokens.first().map(|t| t.token_type), Some(TokenType::Select));
    assert_eq!(tokens.last().map(|t| t.token_type), Some(TokenType::Eof));
}

#[test]
fn test_parse_all_statement_kinds() -> Result<()> {
    let cases = [
        ("SELECT * FROM users", "SELECT"),
        ("CREATE TABLE t (id INTEGER)", "CREATE TABLE"),
        ("INSERT users", "INSERT"),
        ("UPDATE users", "UPDATE"),
        ("DELETE FROM users", "DELETE"),
    ];

    for (sql, display) in cases {
        let stmt = parse(sql)?;
        assert_eq!(stmt.to_string(), display, "запрос: {}", sql);
    }

    Ok(())
}

#[test]
fn test_full_select_through_public_api() -> Result<()> {
    let stmt = parse(
        "SELECT id, name \
         FROM users u \
         WHERE age >= 21 \
         ORDER BY name DESC, id \
         LIMIT 10 OFFSET 20",
    )?;

    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.fields.len(), 2);
            assert_eq!(select.from.as_ref().unwrap().name.name, "users");
            assert_eq!(
                select.from.as_ref().unwrap().alias.as_ref().unwrap().name,
                "u"
            );
            assert!(matches!(
                select.where_clause,
                Some(Expression::Binary(_))
            ));
            assert_eq!(select.order_by.len(), 2);
            assert!(select.limit.is_some());
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_comments_and_quoting_end_to_end() -> Result<()> {
    let stmt = parse(
        "SELECT \"full name\" -- комментарий\n\
         FROM users /* ещё комментарий */ \
         WHERE note = 'it''s fine'",
    )?;

    match stmt {
        Statement::Select(select) => {
            match &select.fields[0] {
                Expression::Identifier(ident) => assert_eq!(ident.name, "full name"),
                other => panic!("Ожидался идентификатор, получено {:?}", other),
            }
            match select.where_clause.unwrap() {
                Expression::Binary(binary) => match *binary.right {
                    Expression::String(ref string) => assert_eq!(string.value, "it's fine"),
                    ref other => panic!("Ожидалась строка, получено {:?}", other),
                },
                other => panic!("Ожидалось сравнение, получено {:?}", other),
            }
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parsed_tree_serializes_to_json() -> Result<()> {
    let stmt = parse("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")?;

    let json = serde_json::to_value(&stmt)?;
    assert!(json.get("CreateTable").is_some());

    let restored: Statement = serde_json::from_value(json)?;
    assert_eq!(stmt, restored);

    Ok(())
}

#[test]
fn test_errors_do_not_panic() {
    // Ошибочные входы дают Err, но никогда не панику
    for sql in ["", "FOO", "SELECT * FROM", "CREATE TABLE", "DELETE WHERE", "@#"] {
        let _ = parse(sql);
    }
}
