//! GPC account statements.
//!
//! A statement is a `074` header record followed by zero or more `075`
//! transaction records. The end of the input right where the next record
//! would start terminates the statement.

use crate::codec::FieldReader;
use crate::decimal::Amount;
use crate::error::{AboError, Result, ResultExt};
use crate::transaction::{Transaction, TransactionRecord};
use chrono::NaiveDate;
use log::{debug, info};
use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};

/// Record type of the statement header.
pub const HEADER_RECORD_TYPE: &str = "074";

/// Statement header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementInfo {
    /// Account the statement belongs to.
    pub account_number: u64,

    /// Account name.
    pub account_name: String,

    /// First day covered by the statement.
    pub start_date: NaiveDate,

    /// Last day covered by the statement.
    pub end_date: NaiveDate,

    /// Balance before the first transaction.
    pub opening_balance: Amount,

    /// Balance after the last transaction.
    pub closing_balance: Amount,

    /// Sum of all credits.
    pub income_sum: Amount,

    /// Sum of all debits.
    pub expense_sum: Amount,

    /// Sequence number of the statement.
    pub statement_number: u64,
}

impl StatementInfo {
    /// Parses the header record including its line terminator.
    pub fn read_from<R: BufRead>(rdr: &mut FieldReader<R>) -> Result<Self> {
        let record_type = rdr.read_string(3).context("record type")?;
        if record_type != HEADER_RECORD_TYPE {
            return Err(AboError::Format(format!(
                "wrong record type '{}'",
                record_type
            )));
        }

        let account_number = rdr.read_int(16).context("account number")?;
        let account_name = rdr
            .read_windows1250_string(20)
            .context("account name")?;
        let start_date = rdr.read_date().context("start date")?;

        let opening_balance = read_signed_balance(rdr).context("opening balance")?;
        let closing_balance = read_signed_balance(rdr).context("closing balance")?;

        let expense_sum = rdr.read_amount(14).context("expense sum")?;
        rdr.skip(1).context("expense sum filler")?;
        let income_sum = rdr.read_amount(14).context("income sum")?;
        rdr.skip(1).context("income sum filler")?;

        let statement_number = rdr.read_int(3).context("statement number")?;
        let end_date = rdr.read_date().context("end date")?;

        rdr.skip(14).context("reserved")?;
        rdr.skip_line_end()?;

        Ok(StatementInfo {
            account_number,
            account_name,
            start_date,
            end_date,
            opening_balance,
            closing_balance,
            income_sum,
            expense_sum,
            statement_number,
        })
    }
}

/// Reads a 14-column magnitude followed by its sign byte.
fn read_signed_balance<R: BufRead>(rdr: &mut FieldReader<R>) -> Result<Amount> {
    let magnitude = rdr.read_amount(14)?;
    let sign = rdr.read_byte()?;
    Ok(if sign == b'-' { -magnitude } else { magnitude })
}

/// An account statement in GPC format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Header data.
    pub info: StatementInfo,

    /// Transactions in file order.
    pub transactions: Vec<Transaction>,
}

impl Statement {
    /// Parses a statement from a buffered stream.
    ///
    /// Either the whole statement is returned or an error naming the record
    /// and field that failed; transactions read before the failure are
    /// discarded.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut rdr = FieldReader::new(reader);

        let info = StatementInfo::read_from(&mut rdr).context("header")?;
        let transactions = read_transactions(&mut rdr)?;

        info!(
            "Parsed statement {} for account {} with {} transactions",
            info.statement_number,
            info.account_number,
            transactions.len()
        );

        Ok(Statement { info, transactions })
    }

    /// Parses a statement from an unbuffered source, taking ownership of it.
    ///
    /// The source is dropped (and thereby closed) once parsing completes or fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read_from(BufReader::new(reader))
    }

    /// Writes the transactions as CSV, header row first.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(TransactionRecord::HEADERS)?;
        for txn in &self.transactions {
            csv_writer.serialize(TransactionRecord::from(txn))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn read_transactions<R: BufRead>(rdr: &mut FieldReader<R>) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();

    while !rdr.is_at_end()? {
        let index = transactions.len() + 1;
        let offset = rdr.offset();

        let txn = Transaction::read_from(rdr)
            .with_context(|| format!("transaction {} at byte {}", index, offset))?;
        debug!("Parsed transaction {}: {} {}", txn.id, txn.kind, txn.amount);

        transactions.push(txn);
    }

    Ok(transactions)
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Statement For {} ({})",
            self.info.account_number, self.info.account_name
        )?;
        writeln!(
            f,
            "Opening Balance {}, Closing Balance {}",
            self.info.opening_balance, self.info.closing_balance
        )?;
        writeln!(f, "Range {} - {}", self.info.start_date, self.info.end_date)?;
        writeln!(f)?;
        writeln!(f, "Transactions:")?;

        for txn in &self.transactions {
            writeln!(f, "- {}", txn)?;
        }
        Ok(())
    }
}
