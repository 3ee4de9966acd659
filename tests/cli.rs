use std::process::Command;

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_basic-maths"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run basic-maths");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

fn value_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|l| !l.starts_with('='))
        .map(str::to_string)
        .collect()
}

#[test]
fn lists_divisors() {
    let (ok, stdout) = run(&["divisors", "12"]);
    assert!(ok);
    assert_eq!(value_lines(&stdout), vec!["divisors 12 -> [1, 2, 3, 4, 6, 12]"]);
}

#[test]
fn reverses_negative_input() {
    let (ok, stdout) = run(&["reverse", "-123"]);
    assert!(ok);
    assert_eq!(value_lines(&stdout), vec!["reverse -123 -> -321"]);
}

#[test]
fn reverse_overflow_prints_zero() {
    let (ok, stdout) = run(&["reverse", "1534236469"]);
    assert!(ok);
    assert_eq!(value_lines(&stdout), vec!["reverse 1534236469 -> 0"]);
}

#[test]
fn scans_for_primes() {
    let (ok, stdout) = run(&["scan", "prime", "10", "20"]);
    assert!(ok);
    assert_eq!(
        value_lines(&stdout),
        vec!["scan prime 10..=20 -> [11, 13, 17, 19]"]
    );
}

#[test]
fn runs_demo_by_default() {
    let (ok, stdout) = run(&[]);
    assert!(ok);
    let lines = value_lines(&stdout);
    assert_eq!(lines.len(), 14);
    assert!(lines[0].starts_with("armstrong 153"));
    assert!(lines[0].ends_with("-> true"));
}

#[test]
fn unknown_predicate_fails() {
    let (ok, _) = run(&["scan", "perfect", "1", "10"]);
    assert!(!ok);
}

#[test]
fn help_exits_successfully() {
    let (ok, stdout) = run(&["--help"]);
    assert!(ok);
    assert!(stdout.contains("Usage"));
}

#[test]
fn bad_number_fails() {
    let (ok, _) = run(&["prime", "seven"]);
    assert!(!ok);
}
