//! # ABO/GPC
//!
//! Encoder for ABO payment orders and decoder for GPC account statements,
//! the fixed-width text interchange format of Czech and Slovak banks.
//!
//! ## Design Principles
//!
//! - **Exact layout**: every field consumes exactly its declared column width
//! - **Fixed-point money**: amounts are `rust_decimal` values scaled by 100 in the file
//! - **windows-1250 text**: name and message columns are transcoded via `encoding`
//! - **Fail fast**: a malformed record aborts the whole read or write with the
//!   offending field named in the error
//!
//! ## Example
//!
//! ```no_run
//! use abo_gpc::{AccountNumber, Amount, BankAccount, Client, Order, Statement};
//! use chrono::NaiveDate;
//! use std::fs::File;
//! use std::str::FromStr;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
//! let client = Client {
//!     name: "Firma s.r.o.".to_string(),
//!     account_number: 2101135843,
//!     bank_code: 2010,
//! };
//!
//! let mut order = Order::new(today, client);
//! let group = order.add_group(AccountNumber::new(0, 2101135843), today);
//! group.add_simple_item(
//!     BankAccount::new(0, 1900133399, 2010),
//!     Amount::from_str("1.23").unwrap(),
//!     88888888,
//!     "",
//! );
//! order.write_to(std::io::stdout()).unwrap();
//!
//! let statement = Statement::from_reader(File::open("statement.gpc").unwrap()).unwrap();
//! println!("{}", statement);
//! ```

pub mod account;
pub mod codec;
pub mod currency;
pub mod decimal;
pub mod error;
pub mod order;
pub mod statement;
pub mod transaction;

pub use account::{AccountNumber, BankAccount};
pub use codec::{FieldReader, FieldWriter};
pub use currency::Currency;
pub use decimal::Amount;
pub use error::{AboError, ErrorKind, Result};
pub use order::{Client, Group, Item, Order};
pub use statement::{Statement, StatementInfo};
pub use transaction::{Counterparty, Transaction, TransactionRecord, TransactionType};
