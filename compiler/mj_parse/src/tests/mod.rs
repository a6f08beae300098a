//! Parser tests.
//!
//! - `programs`: whole-program scenarios and the first-error-wins rule
//! - `disambiguation`: Type-or-Reference classification in statements
//! - `items`: classes, fields, methods and parameters
//! - `statements`: control flow and the `for` header
//! - `expressions`: operands, operators, `new`, array literals
//! - `dialects`: behavior that differs between mini and extended


use mj_diagnostic::{Diagnostic, ErrorCode, ErrorReporter};
use mj_ir::Dialect;

fn diagnostics(source: &str, dialect: Dialect) -> Vec<Diagnostic> {
    let reporter = ErrorReporter::new();
    crate::parse(source, dialect, &reporter);
    reporter.diagnostics()
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that `source` parses with no diagnostics.
#[track_caller]
fn parse_ok(source: &str, dialect: Dialect) {
    let diagnostics = diagnostics(source, dialect);
    assert!(
        diagnostics.is_empty(),
        "expected {source:?} to parse under {dialect}, got:\n{}",
        render(&diagnostics)
    );
}

/// Assert that `source` produces exactly one diagnostic and return it.
#[track_caller]
fn parse_err(source: &str, dialect: Dialect) -> Diagnostic {
    let mut diagnostics = diagnostics(source, dialect);
    assert_eq!(
        diagnostics.len(),
        1,
        "expected one error for {source:?} under {dialect}, got:\n{}",
        render(&diagnostics)
    );
    diagnostics.remove(0)
}

#[track_caller]
fn parse_err_code(source: &str, dialect: Dialect) -> ErrorCode {
    parse_err(source, dialect).code
}

/// Wrap statements in a method of a class, with the header the dialect
/// requires.
fn in_method(body: &str, dialect: Dialect) -> String {
    let header = if dialect.is_extended() { "package p; " } else { "" };
    format!("{header}class A {{ void m() {{ {body} }} }}")
}

/// Wrap members in a class, with the header the dialect requires.
fn in_class(members: &str, dialect: Dialect) -> String {
    let header = if dialect.is_extended() { "package p; " } else { "" };
    format!("{header}class A {{ {members} }}")
}

#[track_caller]
fn stmt_ok(body: &str, dialect: Dialect) {
    parse_ok(&in_method(body, dialect), dialect);
}

#[track_caller]
fn stmt_err(body: &str, dialect: Dialect) -> Diagnostic {
    parse_err(&in_method(body, dialect), dialect)
}
