//! Тесты парсера SQL

pub mod parser_tests;
