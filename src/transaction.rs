//! Transaction records of a GPC account statement.

use crate::account::{BankAccount, BANK_CODE_WIDTH, NUMBER_WIDTH, PREFIX_WIDTH};
use crate::codec::FieldReader;
use crate::currency::Currency;
use crate::decimal::Amount;
use crate::error::{AboError, Result, ResultExt};
use chrono::NaiveDate;
use log::warn;
use serde::Serialize;
use std::fmt;
use std::io::BufRead;

/// Record type of a transaction line.
pub const RECORD_TYPE: &str = "075";

/// Direction of a transaction, as coded in column 61.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    /// Money leaving the account.
    Debit,

    /// Money arriving on the account.
    Credit,

    /// Reversal of an earlier debit.
    DebitReversal,

    /// Reversal of an earlier credit.
    CreditReversal,
}

impl TransactionType {
    /// Numeric code used in the file.
    pub fn code(&self) -> u8 {
        match self {
            TransactionType::Debit => 1,
            TransactionType::Credit => 2,
            TransactionType::DebitReversal => 4,
            TransactionType::CreditReversal => 5,
        }
    }
}

impl TryFrom<u64> for TransactionType {
    type Error = AboError;

    fn try_from(code: u64) -> Result<Self> {
        match code {
            1 => Ok(TransactionType::Debit),
            2 => Ok(TransactionType::Credit),
            4 => Ok(TransactionType::DebitReversal),
            5 => Ok(TransactionType::CreditReversal),
            other => Err(AboError::Format(format!(
                "unknown transaction type {}",
                other
            ))),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
            TransactionType::DebitReversal => "debit reversal",
            TransactionType::CreditReversal => "credit reversal",
        };
        f.write_str(name)
    }
}

/// The other side of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Counterparty {
    /// Account name as reported by the bank.
    pub name: String,

    /// Counterparty account and bank.
    pub account: BankAccount,
}

/// One movement on the statement account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Account the statement belongs to.
    pub owner_account_number: u64,

    /// Other side of the transaction.
    pub counterparty: Counterparty,

    /// Bank-assigned transaction identifier.
    pub id: u64,

    /// Transferred amount, never negative.
    pub amount: Amount,

    /// Currency of the amount.
    pub currency: Currency,

    /// Direction of the transaction.
    pub kind: TransactionType,

    /// Variable symbol.
    pub vs: u64,

    /// Constant symbol.
    pub ks: u64,

    /// Specific symbol.
    pub ss: u64,

    /// Due date.
    pub due_date: NaiveDate,
}

impl Transaction {
    /// Parses a transaction record, starting at its record type column.
    ///
    /// The line terminator after the record is consumed as well.
    pub fn read_from<R: BufRead>(rdr: &mut FieldReader<R>) -> Result<Self> {
        let record_type = rdr.read_string(3).context("record type")?;
        if record_type != RECORD_TYPE {
            return Err(AboError::Format(format!(
                "wrong txn record type '{}'",
                record_type
            )));
        }

        let owner_account_number = rdr.read_int(16).context("owner account number")?;

        let prefix = rdr
            .read_int(PREFIX_WIDTH)
            .context("counterparty account prefix")?;
        let number = rdr
            .read_int(NUMBER_WIDTH)
            .context("counterparty account number")?;

        let id = rdr.read_int(13).context("transaction id")?;
        let amount = rdr.read_amount(12).context("amount")?;

        let kind = rdr
            .read_int(1)
            .and_then(TransactionType::try_from)
            .context("transaction type")?;

        let vs = rdr.read_int(10).context("variable symbol")?;
        rdr.skip(2).context("filler after variable symbol")?;

        let bank_code = rdr
            .read_int(BANK_CODE_WIDTH)
            .context("counterparty bank code")?;
        let ks = rdr.read_int(4).context("constant symbol")?;
        let ss = rdr.read_int(10).context("specific symbol")?;
        rdr.skip(6).context("filler after specific symbol")?;

        let name = rdr
            .read_windows1250_string(20)
            .context("counterparty name")?;
        rdr.skip(1).context("filler after counterparty name")?;

        let currency_code = rdr.read_int(4).context("currency")?;
        let currency = u16::try_from(currency_code)
            .map(Currency)
            .map_err(|_| AboError::Format(format!("currency code {} is out of range", currency_code)))
            .context("currency")?;
        if !currency.is_known() {
            warn!("Transaction {}: unknown currency code {}", id, currency.code());
        }

        let due_date = rdr.read_date().context("due date")?;
        rdr.skip_line_end()?;

        Ok(Transaction {
            owner_account_number,
            counterparty: Counterparty {
                name,
                account: BankAccount::new(prefix, number, bank_code),
            },
            id,
            amount,
            currency,
            kind,
            vs,
            ks,
            ss,
            due_date,
        })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Type: {}, Recipient: {}, Recipient Acc: {} Amount: {} {}, VS: {}, KS: {}, SS: {}, Due Date: {}",
            self.id,
            self.kind,
            self.counterparty.name,
            self.counterparty.account,
            self.amount,
            self.currency,
            self.vs,
            self.ks,
            self.ss,
            self.due_date
        )
    }
}

/// Flat transaction row for CSV export.
#[derive(Debug, Serialize)]
pub struct TransactionRecord<'a> {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Amount,
    pub currency: Currency,
    pub counterparty_name: &'a str,
    pub counterparty_account: String,
    pub vs: u64,
    pub ks: u64,
    pub ss: u64,
    pub due_date: NaiveDate,
}

impl TransactionRecord<'_> {
    /// Column names, in serialization order.
    pub const HEADERS: [&'static str; 10] = [
        "id",
        "type",
        "amount",
        "currency",
        "counterparty_name",
        "counterparty_account",
        "vs",
        "ks",
        "ss",
        "due_date",
    ];
}

impl<'a> From<&'a Transaction> for TransactionRecord<'a> {
    fn from(txn: &'a Transaction) -> Self {
        TransactionRecord {
            id: txn.id,
            kind: txn.kind,
            amount: txn.amount,
            currency: txn.currency,
            counterparty_name: &txn.counterparty.name,
            counterparty_account: txn.counterparty.account.to_string(),
            vs: txn.vs,
            ks: txn.ks,
            ss: txn.ss,
            due_date: txn.due_date,
        }
    }
}
