use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("dio-bank"));
    cmd.write_stdin("d\n100\ns\n40\ne\nq\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to DIO Bank!"))
        .stdout(predicate::str::contains("================ MENU ================"))
        .stdout(predicate::str::contains("Deposit:\tR$ 100.00"))
        .stdout(predicate::str::contains("Withdrawal:\t\tR$ 40.00"))
        .stdout(predicate::str::contains("Balance:\t\tR$ 60.00"))
        .stdout(predicate::str::ends_with(
            "Thank you for using our system. Goodbye!\n",
        ));

    Ok(())
}

#[test]
fn test_cli_rejections_are_not_fatal() {
    let mut cmd = Command::new(cargo_bin!("dio-bank"));
    cmd.write_stdin("zz\nd\n-10\nd\nabc\ns\n5\nq\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "@@@ Invalid operation! Please select the desired operation again. @@@",
        ))
        .stdout(predicate::str::contains(
            "@@@ Operation failed! The amount entered is invalid. @@@",
        ))
        .stdout(predicate::str::contains("'abc' is not a valid amount"))
        .stdout(predicate::str::contains(
            "@@@ Operation failed! You do not have enough balance. @@@",
        ));
}

#[test]
fn test_cli_customer_and_accounts() {
    let mut cmd = Command::new(cargo_bin!("dio-bank"));
    cmd.write_stdin(concat!(
        "lc\n",
        "nc\n999\n",
        "nu\n999\nAna Souza\n10-05-1985\nRua A, 10 - Centro - Recife/PE\n",
        "nc\n999\n",
        "lc\n",
        "q\n",
    ));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "@@@ No accounts registered in the system. @@@",
        ))
        .stdout(predicate::str::contains(
            "Customer with national ID 999 not found!",
        ))
        .stdout(predicate::str::contains(
            "=== Customer Ana Souza created successfully! ===",
        ))
        .stdout(predicate::str::contains(
            "=== Account 1 (Branch 0001) created successfully for Ana Souza! ===",
        ))
        .stdout(predicate::str::contains("Holder: \tAna Souza"));
}

#[test]
fn test_cli_configured_limits() {
    let mut cmd = Command::new(cargo_bin!("dio-bank"));
    cmd.args(["--withdrawal-limit", "50", "--max-daily-withdrawals", "1"])
        .write_stdin("d\n1000\ns\n60\ns\n50\ns\n10\nq\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "The withdrawal amount exceeds the limit of R$ 50.00.",
        ))
        .stdout(predicate::str::contains(
            "Maximum number of 1 daily withdrawals reached.",
        ));
}

#[test]
fn test_cli_end_of_input_without_quit() {
    let mut cmd = Command::new(cargo_bin!("dio-bank"));
    cmd.write_stdin("d\n25\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Deposit completed successfully!"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_cli_deposit_overflow_keeps_session_alive() {
    let mut cmd = Command::new(cargo_bin!("dio-bank"));
    cmd.write_stdin("d\n79228162514264337593543950335\nd\n1\ne\nq\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "@@@ Operation failed! The amount is out of the supported range. @@@",
        ))
        .stdout(predicate::str::contains(
            "Balance:\t\tR$ 79228162514264337593543950335.00",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}
