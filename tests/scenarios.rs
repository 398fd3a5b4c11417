use std::fs;
use std::io::Cursor;

use bank_simulator::{
    config::Config,
    output::Format,
    run::run,
    state::{Command, Error, State},
};
use rust_decimal_macros::dec;

fn run_script(script: &str, config: &Config) -> (State, String) {
    let mut out = Vec::<u8>::new();
    let state = run(Cursor::new(script.as_bytes()), &mut out, config).expect("run should succeed");
    (state, String::from_utf8(out).expect("output was not valid UTF-8"))
}

fn normalize(s: &str) -> String {
    // Normalize line endings + drop blank lines, so fixtures are stable across platforms.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn account_lifecycle_script() {
    let input = fs::read_to_string("tests/fixtures/lifecycle_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/lifecycle_expected.txt").unwrap();

    let (state, actual) = run_script(&input, &Config::default());

    assert_eq!(normalize(&expected), normalize(&actual));
    // The deposit after the deletion had nothing selected to act upon.
    assert_eq!(None, state.selected);
    assert_eq!("10", state.amount);
}

#[test]
fn create_deposit_withdraw_interest() {
    let mut state = State::default();
    for command in vec![
        Command::CreateAccount,
        Command::SelectAccount("acc-1".to_string()),
        Command::SetAmount("100".to_string()),
        Command::Deposit,
        Command::SetAmount("30".to_string()),
        Command::Withdraw,
        Command::ApplyInterest,
    ] {
        state.update(command).expect("every command should go through");
    }

    let account = state.ledger.account("acc-1").unwrap();
    assert_eq!(dec!(70.70), account.balance_amount());
    assert_eq!(dec!(0), account.loan_amount());
}

#[test]
fn identifiers_never_collide_after_deletion() {
    let mut state = State::default();
    for _ in 0..3 {
        state.update(Command::CreateAccount).unwrap();
    }
    state
        .update(Command::DeleteAccount("acc-2".to_string()))
        .unwrap();

    let notification = state.update(Command::CreateAccount).unwrap().unwrap();
    assert_eq!(
        "Account ID: acc-4 has been successfully created.",
        notification.description
    );

    let ids: Vec<&str> = state.ledger.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(vec!["acc-1", "acc-3", "acc-4"], ids);
}

#[test]
fn operations_after_deleting_the_selected_account() {
    let mut state = State::default();
    state.update(Command::CreateAccount).unwrap();
    state
        .update(Command::SelectAccount("acc-1".to_string()))
        .unwrap();
    state
        .update(Command::DeleteAccount("acc-1".to_string()))
        .unwrap();

    for command in vec![Command::Deposit, Command::ApplyInterest, Command::TakeLoan] {
        assert_eq!(Err(Error::NoAccountSelected), state.update(command));
    }
    assert!(state.ledger.is_empty());
}

#[test]
fn loans_accumulate() {
    let script = "action,value
create
select,acc-1
loan_amount,500
loan
loan_amount,200
loan
";
    let config = Config {
        format: Format::Csv,
        ..Config::default()
    };

    let (state, actual) = run_script(script, &config);

    let account = state.ledger.account("acc-1").unwrap();
    assert_eq!(dec!(700), account.balance_amount());
    assert_eq!(dec!(700), account.loan_amount());
    assert!(actual.ends_with("account,balance,loan\nacc-1,700.00,700.00\n"), "{}", actual);
}

#[test]
fn configured_interest_rate() {
    let script = "action,value
create
select,acc-1
amount,200
deposit
interest
interest
";
    let config = Config {
        interest_rate: dec!(0.1),
        ..Config::default()
    };

    let (state, actual) = run_script(script, &config);

    assert_eq!(
        dec!(242),
        state.ledger.account("acc-1").unwrap().balance_amount()
    );
    assert!(actual.ends_with("acc-1 - $242.00\n"), "{}", actual);
}
