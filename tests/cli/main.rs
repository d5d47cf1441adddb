use std::process::{Command, Output};

fn rpncalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpncalc"))
        .arg("--color")
        .arg("never")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run rpncalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_every_stage() {
    let output = rpncalc(&["(1 + 2) * 3"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Tokens: ( 1 + 2 ) * 3\nRPN:    1 2 + 3 *\nResult: 9\n"
    );
}

#[test]
fn joins_words_with_spaces() {
    let output = rpncalc(&["1", "+", "2.5", "*", "2"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Tokens: 1 + 2.5 * 2\nRPN:    1 2.5 2 * +\nResult: 6\n"
    );
}

#[test]
fn tokenizer_error_points_at_character() {
    let output = rpncalc(&["1 + a"]);
    let stderr = stderr(&output);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr.contains("Tokenizer error"));
    assert!(stderr.contains("invalid character 'a' at position 4"));
    assert!(stderr.contains("  1 + a\n      ^"));
}

#[test]
fn converter_error_keeps_tokens() {
    let output = rpncalc(&["-3", "+", "1"]);
    let stderr = stderr(&output);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Tokens: - 3 + 1\n");
    assert!(stderr.contains("Shunting Yard error"));
    assert!(stderr.contains("unary minus is not supported"));
}

#[test]
fn evaluator_error_keeps_tokens_and_postfix() {
    let output = rpncalc(&["1 / (2 - 2)"]);
    let stderr = stderr(&output);

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Tokens: 1 / ( 2 - 2 )\nRPN:    1 2 2 - /\n"
    );
    assert!(stderr.contains("RPN eval error"));
    assert!(stderr.contains("division by zero"));
}

#[test]
fn no_expression_prints_usage() {
    let output = rpncalc(&[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}
