//! Тесты для синтаксического анализатора SQL

use crate::common::Result;
use crate::parser::{
    parse, Constraint, Expression, OrderDirection, Statement,
};

#[test]
fn test_parse_simple_select() -> Result<()> {
    let stmt = parse("SELECT * FROM users")?;

    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.fields.len(), 1);
            match &select.fields[0] {
                Expression::Identifier(ident) => assert_eq!(ident.name, "*"),
                other => panic!("Ожидался идентификатор, получено {:?}", other),
            }

            let from = select.from.as_ref().unwrap();
            assert_eq!(from.name.name, "users");
            assert!(from.alias.is_none());
            assert!(select.where_clause.is_none());
            assert!(select.order_by.is_empty());
            assert!(select.limit.is_none());
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_select_columns() -> Result<()> {
    let stmt = parse("SELECT name, age FROM users")?;

    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.fields.len(), 2);
            match &select.fields[0] {
                Expression::Identifier(ident) => assert_eq!(ident.name, "name"),
                other => panic!("Ожидался идентификатор, получено {:?}", other),
            }
            match &select.fields[1] {
                Expression::Identifier(ident) => assert_eq!(ident.name, "age"),
                other => panic!("Ожидался идентификатор, получено {:?}", other),
            }
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_table_alias() -> Result<()> {
    // Псевдоним через AS
    let stmt = parse("SELECT * FROM users AS u")?;
    match stmt {
        Statement::Select(select) => {
            let from = select.from.unwrap();
            assert_eq!(from.name.name, "users");
            assert_eq!(from.alias.unwrap().name, "u");
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    // Голый псевдоним
    let stmt = parse("SELECT * FROM users u")?;
    match stmt {
        Statement::Select(select) => {
            let from = select.from.unwrap();
            assert_eq!(from.name.name, "users");
            assert_eq!(from.alias.unwrap().name, "u");
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_where_comparison() -> Result<()> {
    let stmt = parse("SELECT * FROM users WHERE age > 18")?;

    match stmt {
        Statement::Select(select) => {
            match select.where_clause.unwrap() {
                Expression::Binary(binary) => {
                    assert_eq!(binary.operator, ">");
                    match *binary.left {
                        Expression::Identifier(ref ident) => assert_eq!(ident.name, "age"),
                        ref other => panic!("Ожидался идентификатор, получено {:?}", other),
                    }
                    match *binary.right {
                        Expression::Number(ref number) => assert_eq!(number.value, "18"),
                        ref other => panic!("Ожидалось число, получено {:?}", other),
                    }
                }
                other => panic!("Ожидалось сравнение, получено {:?}", other),
            }
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_where_like() -> Result<()> {
    let stmt = parse("SELECT * FROM users WHERE name LIKE 'A%'")?;

    match stmt {
        Statement::Select(select) => match select.where_clause.unwrap() {
            Expression::Binary(binary) => {
                assert_eq!(binary.operator, "LIKE");
                match *binary.right {
                    Expression::String(ref string) => assert_eq!(string.value, "A%"),
                    ref other => panic!("Ожидалась строка, получено {:?}", other),
                }
            }
            other => panic!("Ожидалось сравнение, получено {:?}", other),
        },
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_flat_comparison_ignores_logical_tail() -> Result<()> {
    // Грамматика выражений плоская: AND не поддерживается, разбор
    // останавливается после первого сравнения
    let stmt = parse("SELECT * FROM users WHERE a = 1 AND b = 2")?;

    match stmt {
        Statement::Select(select) => match select.where_clause.unwrap() {
            Expression::Binary(binary) => {
                assert_eq!(binary.operator, "=");
                match *binary.left {
                    Expression::Identifier(ref ident) => assert_eq!(ident.name, "a"),
                    ref other => panic!("Ожидался идентификатор, получено {:?}", other),
                }
            }
            other => panic!("Ожидалось сравнение, получено {:?}", other),
        },
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_parameters() -> Result<()> {
    for sql in [
        "SELECT * FROM users WHERE id = ?",
        "SELECT * FROM users WHERE name = :name",
        "SELECT * FROM users WHERE age = $age",
    ] {
        let stmt = parse(sql)?;
        match stmt {
            Statement::Select(select) => {
                assert!(select.where_clause.is_some(), "запрос: {}", sql);
            }
            other => panic!("Ожидался SELECT, получено {:?}", other),
        }
    }

    // Имя параметра сохраняет сигил
    let stmt = parse("SELECT * FROM users WHERE name = :name")?;
    match stmt {
        Statement::Select(select) => match select.where_clause.unwrap() {
            Expression::Binary(binary) => match *binary.right {
                Expression::Parameter(ref param) => {
                    assert_eq!(param.name.as_deref(), Some(":name"));
                }
                ref other => panic!("Ожидался параметр, получено {:?}", other),
            },
            other => panic!("Ожидалось сравнение, получено {:?}", other),
        },
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_function_call() -> Result<()> {
    let stmt = parse("SELECT COUNT(id), UPPER(name) FROM users")?;

    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.fields.len(), 2);

            match &select.fields[0] {
                Expression::Function(call) => {
                    assert_eq!(call.name, "COUNT");
                    assert_eq!(call.args.len(), 1);
                }
                other => panic!("Ожидался вызов функции, получено {:?}", other),
            }
            match &select.fields[1] {
                Expression::Function(call) => {
                    assert_eq!(call.name, "UPPER");
                    assert_eq!(call.args.len(), 1);
                }
                other => panic!("Ожидался вызов функции, получено {:?}", other),
            }
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_function_call_no_args() -> Result<()> {
    let stmt = parse("SELECT now() FROM logs")?;

    match stmt {
        Statement::Select(select) => match &select.fields[0] {
            Expression::Function(call) => {
                assert_eq!(call.name, "now");
                assert!(call.args.is_empty());
            }
            other => panic!("Ожидался вызов функции, получено {:?}", other),
        },
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_order_by() -> Result<()> {
    let stmt = parse("SELECT * FROM users ORDER BY name DESC, age")?;

    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.order_by.len(), 2);
            assert_eq!(select.order_by[0].direction, OrderDirection::Desc);
            assert_eq!(select.order_by[1].direction, OrderDirection::Asc);
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_order_by_direction_is_case_sensitive() -> Result<()> {
    // Направление распознается только по точному написанию ASC/DESC
    let stmt = parse("SELECT * FROM users ORDER BY name desc")?;

    match stmt {
        Statement::Select(select) => {
            assert_eq!(select.order_by.len(), 1);
            assert_eq!(select.order_by[0].direction, OrderDirection::Asc);
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_limit_offset() -> Result<()> {
    let stmt = parse("SELECT * FROM users LIMIT 10 OFFSET 5")?;

    match stmt {
        Statement::Select(select) => {
            let limit = select.limit.unwrap();
            match limit.count {
                Expression::Number(ref number) => assert_eq!(number.value, "10"),
                ref other => panic!("Ожидалось число, получено {:?}", other),
            }
            match limit.offset.unwrap() {
                Expression::Number(ref number) => assert_eq!(number.value, "5"),
                ref other => panic!("Ожидалось число, получено {:?}", other),
            }
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_literal_fields() -> Result<()> {
    for sql in [
        "SELECT 'hello' FROM users",
        "SELECT 42 FROM users",
        "SELECT TRUE FROM users",
    ] {
        let stmt = parse(sql)?;
        assert!(matches!(stmt, Statement::Select(_)), "запрос: {}", sql);
    }

    Ok(())
}

#[test]
fn test_parse_create_table() -> Result<()> {
    let stmt = parse("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INT)")?;

    match stmt {
        Statement::CreateTable(create) => {
            assert_eq!(create.table.name, "users");
            assert_eq!(create.columns.len(), 3);

            assert_eq!(create.columns[0].name.name, "id");
            assert_eq!(create.columns[0].type_name.as_deref(), Some("INTEGER"));
            assert!(matches!(
                create.columns[0].constraints[0],
                Constraint::PrimaryKey { .. }
            ));

            assert_eq!(create.columns[1].name.name, "name");
            assert_eq!(create.columns[1].type_name.as_deref(), Some("TEXT"));
            assert!(matches!(
                create.columns[1].constraints[0],
                Constraint::NotNull { .. }
            ));

            assert_eq!(create.columns[2].name.name, "age");
            assert_eq!(create.columns[2].type_name.as_deref(), Some("INT"));
            assert!(create.columns[2].constraints.is_empty());
        }
        other => panic!("Ожидался CREATE TABLE, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_create_table_type_keeps_source_spelling() -> Result<()> {
    let stmt = parse("CREATE TABLE t (a integer)")?;

    match stmt {
        Statement::CreateTable(create) => {
            assert_eq!(create.columns[0].type_name.as_deref(), Some("integer"));
        }
        other => panic!("Ожидался CREATE TABLE, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_create_table_unique_is_unknown_constraint() {
    // UNIQUE запускает цикл ограничений, но собственной ветки не имеет
    let result = parse("CREATE TABLE t (a INTEGER UNIQUE)");
    assert!(result.is_err());

    let result = parse("CREATE TABLE t (a TEXT DEFAULT)");
    assert!(result.is_err());
}

#[test]
fn test_parse_insert_stops_at_table_name() -> Result<()> {
    let stmt = parse("INSERT users")?;

    match stmt {
        Statement::Insert(insert) => {
            assert_eq!(insert.table.name, "users");
            // Грамматика не идет дальше имени таблицы
            assert!(insert.columns.is_empty());
            assert!(insert.values.is_empty());
        }
        other => panic!("Ожидался INSERT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_double_insert() -> Result<()> {
    // Повторное ключевое слово INSERT потребляется без ошибки
    let stmt = parse("INSERT INSERT users")?;

    match stmt {
        Statement::Insert(insert) => assert_eq!(insert.table.name, "users"),
        other => panic!("Ожидался INSERT, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_update_stops_at_table_name() -> Result<()> {
    let stmt = parse("UPDATE users")?;

    match stmt {
        Statement::Update(update) => {
            assert_eq!(update.table.name, "users");
            assert!(update.set.is_empty());
            assert!(update.where_clause.is_none());
        }
        other => panic!("Ожидался UPDATE, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_delete() -> Result<()> {
    let stmt = parse("DELETE FROM users WHERE id = 123")?;

    match stmt {
        Statement::Delete(delete) => {
            assert_eq!(delete.from.name, "users");
            match delete.where_clause.unwrap() {
                Expression::Binary(binary) => assert_eq!(binary.operator, "="),
                other => panic!("Ожидалось сравнение, получено {:?}", other),
            }
        }
        other => panic!("Ожидался DELETE, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_delete_without_where() -> Result<()> {
    let stmt = parse("DELETE FROM users")?;

    match stmt {
        Statement::Delete(delete) => {
            assert_eq!(delete.from.name, "users");
            assert!(delete.where_clause.is_none());
        }
        other => panic!("Ожидался DELETE, получено {:?}", other),
    }

    Ok(())
}

#[test]
fn test_parse_errors() {
    for sql in ["FOO BAR", "SELECT", "SELECT * FROM", "DELETE users", "CREATE users"] {
        assert!(parse(sql).is_err(), "запрос должен падать: {}", sql);
    }
}

#[test]
fn test_statement_position() -> Result<()> {
    let stmt = parse("  SELECT * FROM t")?;
    let pos = stmt.position();
    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 3);

    Ok(())
}

#[test]
fn test_statement_serde_round_trip() -> Result<()> {
    let stmt = parse("SELECT name FROM users WHERE age >= 21 ORDER BY name DESC LIMIT 10")?;

    let json = serde_json::to_string(&stmt)?;
    let restored: Statement = serde_json::from_str(&json)?;

    assert_eq!(stmt, restored);
    Ok(())
}

#[test]
fn test_expression_display() -> Result<()> {
    let stmt = parse("SELECT * FROM users WHERE name = 'Alice'")?;

    match stmt {
        Statement::Select(select) => {
            let where_clause = select.where_clause.unwrap();
            assert_eq!(where_clause.to_string(), "name = 'Alice'");
        }
        other => panic!("Ожидался SELECT, получено {:?}", other),
    }

    Ok(())
}
