use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_extreme_decimal_precision() {
    let file = common::command_file(&[
        "open, X, , 0.0002",
        "open, Y, , 0",
        "transfer, X, Y, 0.0001",
        "transfer, X, Y, 0.0001",
        "transfer, X, Y, 0.0001",
    ]);

    let mut cmd = Command::new(cargo_bin!("account-ledger"));
    cmd.arg("replay").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Transfer amount greater than available balance: 0",
        ))
        .stdout(predicate::str::contains("X,0\n"))
        .stdout(predicate::str::contains("Y,0.0002\n"));
}

