//! Runs the `block2csv` binary against files in a temporary directory.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn block2csv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_block2csv"))
}

#[test]
fn test_default_paths_in_working_dir() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("query.txt"),
        "@@\nname: Alice\nage: 30\n@@\nname: Bob\ncity: Paris\n",
    )
    .unwrap();

    let out = block2csv().current_dir(dir.path()).output().unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "CSV file 'query.csv' created with 2 row(s) and 3 column(s).\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("query.csv")).unwrap(),
        "age,city,name\n30,,Alice\n,Paris,Bob\n"
    );
}

#[test]
fn test_explicit_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blocks.txt");
    let output = dir.path().join("table.csv");
    fs::write(&input, "k: v\n").unwrap();

    let out = block2csv().arg(&input).arg(&output).output().unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("table.csv"));
    assert!(stdout.contains("1 row(s) and 1 column(s)."));
    assert_eq!(fs::read_to_string(&output).unwrap(), "k\nv\n");
}

#[test]
fn test_empty_input() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("query.txt"), "").unwrap();

    let out = block2csv().current_dir(dir.path()).output().unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "CSV file 'query.csv' created with 0 row(s) and 0 column(s).\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("query.csv")).unwrap(),
        "\n"
    );
}

#[test]
fn test_crlf_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("query.txt"), "a: 1\n").unwrap();

    let out = block2csv()
        .arg("--crlf")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("query.csv")).unwrap(),
        "a\r\n1\r\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();

    let out = block2csv().current_dir(dir.path()).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot read input file 'query.txt'"));
    assert!(!dir.path().join("query.csv").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("query.txt"), "a: 1\n").unwrap();
    fs::create_dir(dir.path().join("taken")).unwrap();

    let out = block2csv()
        .args(["query.txt", "taken"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot write output file 'taken'"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_disk_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("query.txt"), "a: 1\n").unwrap();

    let out = block2csv()
        .args(["query.txt", "/dev/full"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot write CSV to '/dev/full'"));
}
