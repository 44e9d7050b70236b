use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn simple_arguments() {
    cargo_bin_cmd!("jo")
        .args(["name=John", "age=30"])
        .assert()
        .success()
        .stdout("{\n  \"age\": \"30\",\n  \"name\": \"John\"\n}\n");
}

#[test]
fn nested_arguments() {
    cargo_bin_cmd!("jo")
        .args(["user[name]=John", "user[age]=30"])
        .assert()
        .success()
        .stdout("{\n  \"user\": {\n    \"age\": \"30\",\n    \"name\": \"John\"\n  }\n}\n");
}

#[test]
fn stdin_is_applied_before_arguments() {
    cargo_bin_cmd!("jo")
        .arg("debug=false")
        .write_stdin("database[host]=localhost\n\n  debug=true  \n")
        .assert()
        .success()
        .stdout("{\n  \"database\": {\n    \"host\": \"localhost\"\n  },\n  \"debug\": \"false\"\n}\n");
}

#[test]
fn invalid_tokens_are_skipped_with_warning() {
    cargo_bin_cmd!("jo")
        .args(["oops", "a=1"])
        .assert()
        .success()
        .stdout("{\n  \"a\": \"1\"\n}\n")
        .stderr(contains(
            "Warning: Skipping invalid argument format 'oops'. Expected 'key=value' or 'key[subkey]=value'.",
        ));
}

#[test]
fn malformed_path_fails() {
    cargo_bin_cmd!("jo")
        .args(["a=1", "a[]=v"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("Error: invalid key path 'a[]'").and(contains("empty key in brackets")));
}

#[test]
fn no_tokens_prints_help() {
    cargo_bin_cmd!("jo")
        .assert()
        .success()
        .stdout(contains("Usage:").and(contains("Examples:")));
}

#[test]
fn only_invalid_tokens_prints_help() {
    cargo_bin_cmd!("jo")
        .arg("oops")
        .assert()
        .success()
        .stdout(contains("Usage:"))
        .stderr(contains("Skipping invalid argument format 'oops'"));
}

#[test]
fn compact_output() {
    cargo_bin_cmd!("jo")
        .args(["--indent", "0", "a[b]=1"])
        .assert()
        .success()
        .stdout("{\"a\":{\"b\":\"1\"}}\n");
}
