use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::{Command,Stdio}; // Run programs
use std::path::Path;
use std::fs::File;

#[test]
fn highlight_plain() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pyasm")?;
    if let Ok(fd) = File::open(Path::new("tests").join("test.dis")) {
        cmd.arg("highlight")
            .stdin(Stdio::from(fd))
            .assert()
            .success()
            .stdout(predicate::str::contains("0:2:3:line-number:3\n"))
            .stdout(predicate::str::contains("0:16:25:mnemonic:LOAD_FAST\n"))
            .stdout(predicate::str::contains("1:43:49:jump-target:(to 8)\n"))
            .stdout(predicate::str::contains("2:0:2:label:L8\n"))
            .stdout(predicate::str::contains("3:0:11:embedded-source:## return x\n"))
            .stdout(predicate::str::contains("5:16:28:mnemonic:RETURN_VALUE\n"))
            .stdout(predicate::str::contains("5:29:35:comment:# done\n"));
    }
    Ok(())
}

#[test]
fn highlight_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("highlight").arg("--json")
        .write_stdin("L2:\n    NOP\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"row":0,"start":0,"end":2,"category":"labelDeclaration","text":"L2"}"#))
        .stdout(predicate::str::contains(r#"{"row":1,"start":4,"end":7,"category":"mnemonic","text":"NOP"}"#));
    Ok(())
}

#[test]
fn highlight_comment_char() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("highlight").arg("--comment-char").arg(";")
        .write_stdin("NOP ; # not a marker\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0:4:20:comment:; # not a marker"));
    Ok(())
}

#[test]
fn bad_comment_char() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("highlight").arg("--comment-char").arg("ab")
        .write_stdin("NOP\n")
        .assert()
        .failure();
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("highlight").arg("--comment-char").arg("x")
        .write_stdin("NOP\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BadCommentChar"));
    Ok(())
}

#[test]
fn indent_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pyasm")?;
    if let Ok(fd) = File::open(Path::new("tests").join("test.dis")) {
        cmd.arg("indent")
            .stdin(Stdio::from(fd))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("        3           0 LOAD_FAST"))
            .stdout(predicate::str::contains("\n                2 POP_JUMP_IF_FALSE"))
            .stdout(predicate::str::contains("\nL8:\n        ## return x\n        4     >>"))
            .stdout(predicate::str::ends_with("                10 RETURN_VALUE # done\n"));
    }
    Ok(())
}

#[test]
fn indent_with_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    let expected = format!("{}# note\n    NOP\nL2:\n"," ".repeat(40));
    cmd.arg("indent").arg("--config").arg(r#"{"commentColumn":40,"tabStops":[4,12]}"#)
        .write_stdin("# note\nNOP\n  L2:\n")
        .assert()
        .success()
        .stdout(predicate::eq(expected));
    Ok(())
}

#[test]
fn indent_keeps_crlf() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("indent")
        .write_stdin("  NOP\r\n  L2:\r\n")
        .assert()
        .success()
        .stdout(predicate::eq("        NOP\r\nL2:\r\n"));
    Ok(())
}

#[test]
fn bad_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("indent").arg("--config").arg("{tabWidth")
        .write_stdin("NOP\n")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn toggle_comments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("comment").arg("-b").arg("1").arg("-e").arg("3")
        .write_stdin("L2:\n    NOP\n\n    RETURN_VALUE\n")
        .assert()
        .success()
        .stdout(predicate::eq("L2:\n    # NOP\n\n    RETURN_VALUE\n"));
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("comment").arg("-b").arg("0").arg("-e").arg("9")
        .write_stdin("# L2:\n  # NOP\n")
        .assert()
        .success()
        .stdout(predicate::eq("L2:\n  NOP\n"));
    Ok(())
}

#[test]
fn comment_bad_range() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("pyasm")?;
    cmd.arg("comment").arg("-b").arg("3").arg("-e").arg("1")
        .write_stdin("NOP\n")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn list_mnemonics() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pyasm")?;
    cmd.arg("mnemonics")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nLOAD_FAST\n"))
        .stdout(predicate::str::contains("\nSTORE_SLICE+3\n"));
    Ok(())
}

#[test]
fn no_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("pyasm")?;
    cmd.assert().failure();
    Ok(())
}
