//! One-file runs and the `lex` command.

use mj_ir::Dialect;
use mjc::commands::lex_file;
use mjc::{DriverConfig, DriverError, RunSummary};
use pretty_assertions::assert_eq;

use crate::common::{run, run_ok, TestDir, ACCEPTED};

#[test]
fn success() {
    let dir = TestDir::new();
    let path = dir.file("fail01.java", ACCEPTED);

    // Names carry no expectation in a single-file run.
    let (summary, output) = run_ok(&path);
    assert_eq!(summary, RunSummary { files: 1, failed: 0 });
    assert_eq!(output, "Success\n");
}

#[test]
fn error_then_diagnostics() {
    let dir = TestDir::new();
    let path = dir.file("a.java", "class A {\n  int x\n}\n");

    let (summary, output) = run_ok(&path);
    assert!(!summary.passed());
    let expected = format!(
        "Error\n\
         error[E1001]: Unexpected token in class body: '}}'\n  \
         --> {}:3:1\n  \
         = note: while parsing a field or method declaration\n\n\
         error: aborting due to previous error\n",
        path.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn lexical_and_syntax_errors_together() {
    let dir = TestDir::new();
    let path = dir.file("a.java", "class A { # }");

    let (_, output) = run_ok(&path);
    assert!(output.starts_with("Error\nerror[E0001]: Invalid character '#'"));
}

#[test]
fn unreadable_paths() {
    let dir = TestDir::new();
    let missing = dir.path().join("missing.java");
    assert!(matches!(
        run(&missing, DriverConfig::default()),
        Err(DriverError::NotFound(path)) if path == missing
    ));

    let binary = dir.path().join("binary.java");
    std::fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
    let error = run(&binary, DriverConfig::default()).unwrap_err();
    assert!(error.to_string().starts_with("error reading '"));
}

#[test]
fn lex_command() {
    let dir = TestDir::new();
    let path = dir.file("a.java", "package p;");

    let mut mini = Vec::new();
    assert_eq!(lex_file(&path, Dialect::Mini, &mut mini).unwrap(), 0);
    let mini = String::from_utf8(mini).unwrap();
    assert!(mini.contains("Ident \"package\" @ 1:1"));

    let mut extended = Vec::new();
    assert_eq!(lex_file(&path, Dialect::Extended, &mut extended).unwrap(), 0);
    let extended = String::from_utf8(extended).unwrap();
    assert!(extended.contains("Package \"package\" @ 1:1"));
    assert!(extended.ends_with("  Eot \"\" @ 1:11\n"));
}
