use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo"));
    cmd.env("HOME", home)
        .env_remove("USERPROFILE")
        .env_remove("TODO_FILE")
        .env_remove("TODO_LOG");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    bin(home)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("run todo")
}

fn run_with_input(home: &Path, args: &[&str], input: &str) -> Output {
    let mut child = bin(home)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn todo");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait todo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8")
}

fn list_file(home: &Path) -> String {
    std::fs::read_to_string(home.join(".todo")).expect("read .todo")
}

#[test]
fn add_creates_list_in_home() {
    let home = TempDir::new().expect("home");

    let output = run(home.path(), &["buy", "milk"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0 [ ] buy milk\n");
    assert_eq!(list_file(home.path()), "[ ] buy milk\n");
}

#[test]
fn bare_invocation_prints_incomplete_without_saving() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "done\n[x] a\n[ ] b\n").expect("write");

    let output = run(home.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0 [ ] done\n2 [ ] b\n");
    assert_eq!(list_file(home.path()), "done\n[x] a\n[ ] b\n");
}

#[test]
fn complete_then_print_all() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] a\n[ ] b\n").expect("write");

    let marked = run(home.path(), &["-c", "0"]);
    assert!(marked.status.success());
    assert_eq!(stdout(&marked), "1 [ ] b\n");

    let all = run(home.path(), &["-c"]);
    assert!(all.status.success());
    assert_eq!(stdout(&all), "0 [x] a\n1 [ ] b\n");
}

#[test]
fn swap_reorders_items() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] a\n[ ] b\n").expect("write");

    let output = run(home.path(), &["-s", "0", "1"]);

    assert!(output.status.success());
    assert_eq!(list_file(home.path()), "[ ] b\n[ ] a\n");
}

#[test]
fn edit_with_pattern_replaces_substring() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] buy milk\n").expect("write");

    let output = run(home.path(), &["-e", "0", "/milk/bread/"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0 [ ] buy bread\n");
}

#[test]
fn edit_takes_hyphenated_words_literally() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] a\n").expect("write");

    let output = run(home.path(), &["-e", "0", "-r", "now"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(list_file(home.path()), "[ ] -r now\n");
}

#[test]
fn remove_completed_asks_first() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[x] a\n[ ] b\n").expect("write");

    let declined = run_with_input(home.path(), &["-r"], "n\n");
    assert!(declined.status.success());
    assert!(stdout(&declined).starts_with("remove all completed todos? [y/N]: "));
    assert_eq!(list_file(home.path()), "[x] a\n[ ] b\n");

    let affirmed = run_with_input(home.path(), &["-r"], "YES\n");
    assert!(affirmed.status.success());
    assert_eq!(list_file(home.path()), "[ ] b\n");
}

#[test]
fn remove_incomplete_without_answer_keeps_item() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] a\n[x] b\n").expect("write");

    let output = run(home.path(), &["-r", "0", "1"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("todo 0 is incomplete. Remove it? [y/N]: "));
    assert_eq!(list_file(home.path()), "[ ] a\n");
}

#[test]
fn invalid_id_fails_without_touching_file() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] a\n").expect("write");

    let output = run(home.path(), &["-c", "5"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid id 5"));
    assert_eq!(list_file(home.path()), "[ ] a\n");
}

#[test]
fn negative_id_is_out_of_range() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[ ] a\n").expect("write");

    let output = run(home.path(), &["-i", "-1"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid id -1"));
}

#[test]
fn argument_errors_are_reported() {
    let home = TempDir::new().expect("home");

    let bad_token = run(home.path(), &["-r", "x"]);
    assert!(!bad_token.status.success());
    assert!(stderr(&bad_token).contains("invalid id \"x\""));

    let short_swap = run(home.path(), &["-s", "0"]);
    assert!(!short_swap.status.success());
    assert!(stderr(&short_swap).contains("expected 2 ids but got 1"));

    let no_desc = run(home.path(), &["-e", "0"]);
    assert!(!no_desc.status.success());
    assert!(stderr(&no_desc).contains("missing description"));

    assert!(!home.path().join(".todo").exists());
}

#[test]
fn help_does_not_touch_storage() {
    let home = TempDir::new().expect("home");

    let output = run(home.path(), &["-h"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("-e id /sub/rep/"));
    assert!(text.contains("todos are stored at"));
    assert!(!home.path().join(".todo").exists());
}

#[test]
fn file_option_and_env_override_home() {
    let home = TempDir::new().expect("home");
    let via_flag = home.path().join("flag.todo");
    let via_env = home.path().join("env.todo");

    let output = run(home.path(), &["-f", via_flag.to_str().expect("path"), "one"]);
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&via_flag).expect("read"), "[ ] one\n");

    let output = bin(home.path())
        .env("TODO_FILE", &via_env)
        .arg("two")
        .output()
        .expect("run todo");
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&via_env).expect("read"), "[ ] two\n");
    assert!(!home.path().join(".todo").exists());
}

#[test]
fn config_file_sets_storage_location() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo.toml"), "file = \"work.todo\"\n").expect("write");

    let output = run(home.path(), &["ship", "it"]);

    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(home.path().join("work.todo")).expect("read"),
        "[ ] ship it\n"
    );
}

#[test]
fn help_shows_file_option_path() {
    let home = TempDir::new().expect("home");
    let custom = home.path().join("custom.todo");

    let output = run(home.path(), &["-f", custom.to_str().expect("path"), "-h"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains(&format!("todos are stored at {}", custom.display())));
    assert!(!custom.exists());
}

#[test]
fn repeated_flags_are_accepted() {
    let home = TempDir::new().expect("home");
    std::fs::write(home.path().join(".todo"), "[x] a\n[ ] b\n").expect("write");

    let output = run(home.path(), &["-c", "-c"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0 [x] a\n1 [ ] b\n");
}

#[test]
fn missing_home_directory_is_fatal() {
    let output = Command::new(env!("CARGO_BIN_EXE_todo"))
        .env_remove("HOME")
        .env_remove("USERPROFILE")
        .env_remove("TODO_FILE")
        .env_remove("TODO_LOG")
        .arg("x")
        .stdin(Stdio::null())
        .output()
        .expect("run todo");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unable to get user's home directory"));
}
