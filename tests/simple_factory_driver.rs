use std::io::Write;
use std::process::{Command, Output};

fn run_driver() -> Output {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "log_level = \"warn\"\ncolor = false").unwrap();

    Command::new(env!("CARGO_BIN_EXE_p1_simple_factory"))
        .env("PATTERNS_CONFIG", config.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn absent_product_ends_with_failure() {
    let output = run_driver();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("Error: Called an operation on the absent product for code 'C'"),
        "stderr was: {stderr}"
    );
}

#[test]
fn known_products_print_before_the_failure() {
    let output = run_driver();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let a = stdout.find("'A' -> This is product A").unwrap();
    let b = stdout.find("'B' -> This is product B").unwrap();
    let unchecked = stdout.find("Using product 'C' without checking").unwrap();
    assert!(a < b && b < unchecked);
    assert!(!stdout.contains("'C' -> "));
}

#[test]
fn unknown_code_is_logged() {
    let output = run_driver();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("no such product"), "stdout was: {stdout}");
    assert!(stdout.contains("No such product: 'C'"));
}
