//! Directory runs.

use mj_ir::Dialect;
use mjc::{DriverConfig, RunSummary};
use pretty_assertions::assert_eq;

use crate::common::{run, run_ok, TestDir, ACCEPTED, REJECTED};

#[test]
fn all_expectations_met() {
    let dir = TestDir::new();
    dir.file("pass01.java", ACCEPTED);
    dir.file("fail01.java", REJECTED);
    dir.file("pass02.java", "class B { }");

    let (summary, output) = run_ok(dir.path());
    assert_eq!(summary, RunSummary { files: 3, failed: 0 });
    assert_eq!(
        output,
        "Compiling File: fail01.java\n\
         ---------------------------\n\
         Compiling File: pass01.java\n\
         ---------------------------\n\
         Compiling File: pass02.java\n\
         ---------------------------\n\
         All tests passed\n"
    );
}

#[test]
fn mismatches_are_named() {
    let dir = TestDir::new();
    dir.file("fail01.java", ACCEPTED);
    dir.file("pass01.java", REJECTED);

    let (summary, output) = run_ok(dir.path());
    assert_eq!(summary, RunSummary { files: 2, failed: 2 });
    assert!(!summary.passed());
    assert_eq!(
        output,
        "Compiling File: fail01.java\n\
         Compiler mismatch: incorrect result for file fail01.java\n\
         ---------------------------\n\
         Compiling File: pass01.java\n\
         Compiler mismatch: incorrect result for file pass01.java\n\
         ---------------------------\n"
    );
}

#[test]
fn verbose_prints_mismatch_diagnostics() {
    let dir = TestDir::new();
    dir.file("pass01.java", REJECTED);
    dir.file("pass02.java", ACCEPTED);

    let config = DriverConfig {
        verbose: true,
        ..DriverConfig::default()
    };
    let (summary, output) = run(dir.path(), config).unwrap();
    assert_eq!(summary.failed, 1);
    assert!(output.contains(
        "Compiler mismatch: incorrect result for file pass01.java\n\
         error[E1003]: void keyword not allowed in field declaration\n"
    ));
    assert!(output.contains("pass01.java:1:17"));
    assert!(output.contains("error: aborting due to previous error\n---"));
}

#[test]
fn hidden_files_and_subdirectories_skipped() {
    let dir = TestDir::new();
    dir.file("pass01.java", ACCEPTED);
    dir.file(".pass-hidden.java", REJECTED);
    let nested = dir.subdir("nested");
    std::fs::write(nested.join("pass02.java"), REJECTED).unwrap();
    dir.file("fail01.java", "class A { # }");

    let (summary, output) = run_ok(dir.path());
    assert_eq!(summary, RunSummary { files: 2, failed: 0 });
    assert!(!output.contains("hidden"));
    assert!(!output.contains("pass02"));
}

#[test]
fn one_file_directory_is_a_single_run() {
    let dir = TestDir::new();
    dir.file("fail01.java", REJECTED);

    let (summary, output) = run_ok(dir.path());
    assert_eq!(summary, RunSummary { files: 1, failed: 1 });
    assert!(output.starts_with("Error\n"));
    assert!(!output.contains("Compiling File"));
}

#[test]
fn empty_directory() {
    let dir = TestDir::new();
    let (summary, output) = run_ok(dir.path());
    assert!(summary.passed());
    assert_eq!(output, "All tests passed\n");
}

#[test]
fn dialect_applies_to_every_file() {
    let dir = TestDir::new();
    dir.file("pass01.java", "package p; import q.*; class A { List<int> xs; }");
    dir.file("fail01.java", "class A { }");

    let mini = run_ok(dir.path()).0;
    assert_eq!(mini.failed, 2);

    let config = DriverConfig {
        dialect: Dialect::Extended,
        ..DriverConfig::default()
    };
    let extended = run(dir.path(), config).unwrap().0;
    assert!(extended.passed());
}
