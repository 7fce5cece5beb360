//! Czech/Slovak domestic account identifiers.
//!
//! A domestic account is a pair of an optional 6-digit prefix and a
//! 10-digit base number, written `prefix-number` in ABO files and
//! `prefix-number/bank` in human-readable output.

use crate::codec::FieldWriter;
use crate::error::{Result, ResultExt};
use std::fmt;
use std::io::Write;

/// Width of the account prefix column.
pub const PREFIX_WIDTH: usize = 6;

/// Width of the account number column.
pub const NUMBER_WIDTH: usize = 10;

/// Width of the bank code column.
pub const BANK_CODE_WIDTH: usize = 4;

/// Account prefix and base number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountNumber {
    /// Prefix (up to 6 digits, usually zero).
    pub prefix: u64,

    /// Base account number (up to 10 digits).
    pub number: u64,
}

impl AccountNumber {
    /// Creates an account number from its prefix and base number.
    pub fn new(prefix: u64, number: u64) -> Self {
        AccountNumber { prefix, number }
    }

    /// Writes the `000000-0000000000` column group.
    pub(crate) fn write_to<W: Write>(&self, wr: &mut FieldWriter<W>) -> Result<()> {
        wr.write_int(self.prefix, PREFIX_WIDTH)
            .context("account prefix")?;
        wr.write_string("-", 1)?;
        wr.write_int(self.number, NUMBER_WIDTH)
            .context("account number")
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0pw$}-{}",
            self.prefix,
            self.number,
            pw = PREFIX_WIDTH
        )
    }
}

/// An account together with the code of the bank that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BankAccount {
    /// Account prefix and number.
    pub account: AccountNumber,

    /// 4-digit national bank code.
    pub bank_code: u64,
}

impl BankAccount {
    /// Creates a bank account reference.
    pub fn new(prefix: u64, number: u64, bank_code: u64) -> Self {
        BankAccount {
            account: AccountNumber::new(prefix, number),
            bank_code,
        }
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:0bw$}",
            self.account,
            self.bank_code,
            bw = BANK_CODE_WIDTH
        )
    }
}
