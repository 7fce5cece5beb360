//! Parsing tests for GPC account statements.

use abo_gpc::{
    Amount, BankAccount, Currency, ErrorKind, Statement, TransactionType,
};
use chrono::NaiveDate;
use std::fs::File;
use std::str::FromStr;

fn amount(s: &str) -> Amount {
    Amount::from_str(s).unwrap()
}

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn header(opening: u64, opening_sign: char) -> String {
    format!(
        "074{:016}{:<20}010118{:014}{}{:014}+{:014}0{:014}0001310118{:14}",
        2101135843u64, "Test", opening, opening_sign, 500u64, 0u64, 0u64, ""
    )
}

fn transaction(id: u64, amount_units: u64, kind: u8) -> String {
    format!(
        "075{:016}{:06}{:010}{:013}{:012}{}{:010}00{:04}{:04}{:010}000000{:<20}0{:04}150118",
        2101135843u64, 0, 1900133399u64, id, amount_units, kind, 0, 100, 0, 0, "Shop", 203
    )
}

#[test]
fn test_builders_produce_128_columns() {
    assert_eq!(header(0, '+').len(), 128);
    assert_eq!(transaction(1, 1, 1).len(), 128);
}

#[test]
fn test_parse_fixture() {
    let stmt = Statement::from_reader(File::open("tests/data/statement.gpc").unwrap()).unwrap();

    assert_eq!(stmt.info.account_number, 2101135843);
    assert_eq!(stmt.info.account_name, "Účet Novák");
    assert_eq!(stmt.info.opening_balance, amount("-1234.00"));
    assert_eq!(stmt.info.closing_balance, amount("2345.00"));
    assert_eq!(stmt.info.expense_sum, amount("100.00"));
    assert_eq!(stmt.info.income_sum, amount("1211.00"));
    assert_eq!(stmt.info.statement_number, 1);
    assert_eq!(stmt.info.start_date, date(1, 1, 2018));
    assert_eq!(stmt.info.end_date, date(31, 1, 2018));

    let ids: Vec<u64> = stmt.transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let first = &stmt.transactions[0];
    assert_eq!(first.amount, amount("1234.56"));
    assert_eq!(first.kind, TransactionType::Debit);
    assert_eq!(first.counterparty.account, BankAccount::new(0, 1900133399, 100));
    assert_eq!(first.counterparty.name, "Jan Novák");
    assert_eq!((first.vs, first.ks, first.ss), (1446556401, 308, 7815392681));

    let second = &stmt.transactions[1];
    assert_eq!(second.kind, TransactionType::Credit);
    assert_eq!(second.currency, Currency::EUR);
    assert_eq!(second.counterparty.name, "Příliš žluťoučký kůň");
    assert_eq!(second.counterparty.account, BankAccount::new(19, 2000145399, 800));
    assert_eq!(second.due_date, date(20, 1, 2018));

    let third = &stmt.transactions[2];
    assert_eq!(third.kind, TransactionType::CreditReversal);
    assert_eq!(third.amount, amount("10.00"));
}

#[test]
fn test_negative_opening_balance() {
    let input = format!("{}\r\n", header(123400, '-'));
    let stmt = Statement::from_reader(input.as_bytes()).unwrap();

    assert_eq!(stmt.info.opening_balance, amount("-1234.00"));
    assert_eq!(stmt.info.closing_balance, amount("5.00"));
}

#[test]
fn test_positive_sign_keeps_balance() {
    let input = format!("{}\r\n", header(123400, '+'));
    let stmt = Statement::from_reader(input.as_bytes()).unwrap();

    assert_eq!(stmt.info.opening_balance, amount("1234.00"));
}

#[test]
fn test_lf_terminated_lines() {
    let input = format!(
        "{}\n{}\n{}\n",
        header(0, '+'),
        transaction(1, 100, 1),
        transaction(2, 200, 2)
    );
    let stmt = Statement::from_reader(input.as_bytes()).unwrap();

    assert_eq!(stmt.transactions.len(), 2);
    assert_eq!(stmt.transactions[1].amount, amount("2.00"));
}

#[test]
fn test_last_record_without_terminator() {
    let input = format!(
        "{}\r\n{}\r\n{}",
        header(0, '+'),
        transaction(1, 100, 1),
        transaction(2, 200, 4)
    );
    let stmt = Statement::from_reader(input.as_bytes()).unwrap();

    assert_eq!(stmt.transactions.len(), 2);
    assert_eq!(stmt.transactions[1].kind, TransactionType::DebitReversal);
}

#[test]
fn test_malformed_record_type_fails_whole_statement() {
    let input = format!(
        "{}\r\n{}\r\n{}\r\n",
        header(0, '+'),
        transaction(1, 100, 1),
        transaction(2, 200, 2).replacen("075", "076", 1)
    );
    let err = Statement::from_reader(input.as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().starts_with("transaction 2 at byte 260:"));
}

#[test]
fn test_truncated_transaction_is_an_error() {
    let input = format!(
        "{}\r\n{}\r\n{}",
        header(0, '+'),
        transaction(1, 100, 1),
        &transaction(2, 200, 2)[..50]
    );
    let err = Statement::from_reader(input.as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    assert!(err.to_string().contains("transaction 2"));
    assert!(err.to_string().contains("amount"));
}

#[test]
fn test_partial_record_type_is_an_error() {
    let input = format!("{}\r\n07", header(0, '+'));
    let err = Statement::from_reader(input.as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    assert!(err.to_string().starts_with("transaction 1 at byte 130: record type:"));
}

#[test]
fn test_invalid_numeric_field() {
    let mut txn = transaction(1, 100, 1);
    txn.replace_range(61..71, "12345X7890");
    let input = format!("{}\r\n{}\r\n", header(0, '+'), txn);
    let err = Statement::from_reader(input.as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("variable symbol"));
}

#[test]
fn test_invalid_due_date() {
    let txn = transaction(1, 100, 1).replace("150118", "320118");
    let input = format!("{}\r\n{}\r\n", header(0, '+'), txn);
    let err = Statement::from_reader(input.as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("due date"));
}

#[test]
fn test_wrong_header_record_type() {
    let input = format!("{}\r\n", transaction(1, 100, 1));
    let err = Statement::from_reader(input.as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().starts_with("header:"));
}

#[test]
fn test_csv_export_has_one_row_per_transaction() {
    let input = format!(
        "{}\r\n{}\r\n{}\r\n",
        header(0, '+'),
        transaction(7, 1999, 1),
        transaction(8, 1, 2)
    );
    let stmt = Statement::from_reader(input.as_bytes()).unwrap();

    let mut out = Vec::new();
    stmt.write_csv(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("7,debit,19.99,CZK,Shop,000000-1900133399/0100,"));
    assert!(lines[2].starts_with("8,credit,0.01,CZK,"));
}

#[test]
fn test_csv_export_without_transactions_writes_header() {
    let input = format!("{}\r\n", header(0, '+'));
    let stmt = Statement::from_reader(input.as_bytes()).unwrap();

    let mut out = Vec::new();
    stmt.write_csv(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "id,type,amount,currency,counterparty_name,counterparty_account,vs,ks,ss,due_date\n"
    );
}
