//! ABO payment orders.
//!
//! An order file contains a header, exactly one accounting block and, inside
//! it, any number of payment groups. Each group debits a single payer
//! account on one due date and lists the individual payments (items).
//!
//! ```text
//! UHL1<date><client name><client account>000999000000000000
//! 1 1501 000000 <bank>
//! 2 <payer account> <group total> <due date>
//! <item>...
//! 3 +
//! 5 +
//! ```

use crate::account::{AccountNumber, BankAccount, BANK_CODE_WIDTH};
use crate::codec::FieldWriter;
use crate::decimal::Amount;
use crate::error::{AboError, Result, ResultExt};
use chrono::NaiveDate;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Message type tag opening every order file.
const MESSAGE_TYPE: &str = "UHL1";

/// Type of data carried by the accounting block (domestic payments).
const DATA_TYPE: u64 = 1501;

/// Lines of the message for recipient.
const MESSAGE_LINES: usize = 4;

/// Characters per message line.
const MESSAGE_LINE_WIDTH: usize = 35;

/// Maximum number of characters in a message for recipient.
pub const MAX_MESSAGE_LEN: usize = MESSAGE_LINES * MESSAGE_LINE_WIDTH;

/// Prefix marking the message for recipient.
const MESSAGE_TAG: &str = "AV:";

/// The client submitting the order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Client {
    /// Client name (windows-1250, 20 columns).
    pub name: String,

    /// Client account number (10 columns).
    pub account_number: u64,

    /// Bank code of the client's bank.
    pub bank_code: u64,
}

/// A single payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Account receiving the payment.
    pub recipient: BankAccount,

    /// Amount to transfer.
    pub amount: Amount,

    /// Variable symbol.
    pub vs: u64,

    /// Constant symbol.
    pub ks: u64,

    /// Specific symbol, omitted from the record when zero.
    pub ss: u64,

    /// Free text for the recipient, omitted when empty.
    pub message: String,
}

impl Item {
    /// Creates a payment without symbols or message.
    pub fn new(recipient: BankAccount, amount: Amount) -> Self {
        Item {
            recipient,
            amount,
            vs: 0,
            ks: 0,
            ss: 0,
            message: String::new(),
        }
    }

    /// Sets the variable, constant and specific symbols.
    pub fn with_symbols(mut self, vs: u64, ks: u64, ss: u64) -> Self {
        self.vs = vs;
        self.ks = ks;
        self.ss = ss;
        self
    }

    /// Sets the message for the recipient.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn write_to<W: Write>(&self, wr: &mut FieldWriter<W>) -> Result<()> {
        self.recipient
            .account
            .write_to(wr)
            .context("recipient account")?;
        wr.write_string(" ", 1)?;

        wr.write_amount(self.amount, 15).context("amount")?;
        wr.write_string(" ", 1)?;

        wr.write_int(self.vs, 10).context("variable symbol")?;
        wr.write_string(" ", 1)?;

        wr.write_int(self.recipient.bank_code, BANK_CODE_WIDTH)
            .context("recipient bank code")?;
        wr.write_int(self.ks, 4).context("constant symbol")?;
        wr.write_string(" ", 1)?;

        if self.ss != 0 {
            wr.write_int(self.ss, 10).context("specific symbol")?;
            wr.write_string(" ", 1)?;
        }

        if !self.message.is_empty() {
            let message: String = self.message.chars().take(MAX_MESSAGE_LEN).collect();
            let field = format!("{}{}", MESSAGE_TAG, message);
            let width = field.chars().count();
            wr.write_windows1250_string(&field, width)
                .context("message for recipient")?;
        }

        wr.write_line_end()
    }
}

/// Payments drawn from one payer account on one due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Account the payments are drawn from.
    pub payer: AccountNumber,

    /// Date the payments are due.
    pub due_date: NaiveDate,

    /// Payments in insertion order.
    pub items: Vec<Item>,
}

impl Group {
    /// Creates an empty group.
    pub fn new(payer: AccountNumber, due_date: NaiveDate) -> Self {
        Group {
            payer,
            due_date,
            items: Vec::new(),
        }
    }

    /// Appends a payment and returns it for further adjustment.
    pub fn add_item(&mut self, item: Item) -> &mut Item {
        self.items.push(item);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Appends a payment with only a variable symbol and a message.
    pub fn add_simple_item(
        &mut self,
        recipient: BankAccount,
        amount: Amount,
        vs: u64,
        message: impl Into<String>,
    ) -> &mut Item {
        self.add_item(
            Item::new(recipient, amount)
                .with_symbols(vs, 0, 0)
                .with_message(message),
        )
    }

    /// Sum of all item amounts, computed from the current items.
    pub fn total(&self) -> Amount {
        self.items.iter().map(|it| it.amount).sum()
    }

    fn write_to<W: Write>(&self, wr: &mut FieldWriter<W>) -> Result<()> {
        wr.write_string("2 ", 2)?;
        self.payer.write_to(wr).context("payer account")?;
        wr.write_string(" ", 1)?;

        let total = self.total();
        wr.write_amount(total, 14).context("total amount")?;
        wr.write_string(" ", 1)?;

        wr.write_date(self.due_date).context("due date")?;
        wr.write_line_end()?;

        for (idx, item) in self.items.iter().enumerate() {
            item.write_to(wr)
                .with_context(|| format!("item {}", idx + 1))?;
        }

        wr.write_string("3 +", 3)?;
        wr.write_line_end()?;

        debug!(
            "Wrote group for payer {} with {} items, total {}",
            self.payer,
            self.items.len(),
            total
        );
        Ok(())
    }
}

/// A payment order in ABO format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Date the order was created.
    pub creation_date: NaiveDate,

    /// Submitting client.
    pub client: Client,

    /// Payment groups in insertion order.
    pub groups: Vec<Group>,
}

impl Order {
    /// Creates an order without any groups.
    pub fn new(creation_date: NaiveDate, client: Client) -> Self {
        Order {
            creation_date,
            client,
            groups: Vec::new(),
        }
    }

    /// Appends a payment group and returns it so items can be added.
    pub fn add_group(&mut self, payer: AccountNumber, due_date: NaiveDate) -> &mut Group {
        self.groups.push(Group::new(payer, due_date));
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Serializes the order into `writer`.
    ///
    /// Any failing field aborts the whole write; the error names the field,
    /// group and item it happened in. Bytes written before the failure are
    /// not rolled back.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wr = FieldWriter::new(writer);

        self.write_header(&mut wr).context("header")?;
        self.write_accounting(&mut wr).context("accounting block")?;
        wr.flush()?;

        info!(
            "Wrote order with {} groups and {} items",
            self.groups.len(),
            self.groups.iter().map(|g| g.items.len()).sum::<usize>()
        );
        Ok(())
    }

    /// Writes the order into a file, replacing any previous content.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(AboError::from)
            .with_context(|| format!("unable to create {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_header<W: Write>(&self, wr: &mut FieldWriter<W>) -> Result<()> {
        wr.write_string(MESSAGE_TYPE, 4).context("message type")?;
        wr.write_date(self.creation_date).context("creation date")?;
        wr.write_windows1250_string(&self.client.name, 20)
            .context("client name")?;
        wr.write_int(self.client.account_number, 10)
            .context("client account number")?;

        // accounting file interval, fixed
        wr.write_int(0, 3)?;
        wr.write_int(999, 3)?;

        // code, fixed and secret part
        wr.write_int(0, 6)?;
        wr.write_int(0, 6)?;

        wr.write_line_end()
    }

    fn write_accounting<W: Write>(&self, wr: &mut FieldWriter<W>) -> Result<()> {
        wr.write_string("1 ", 2)?;
        wr.write_int(DATA_TYPE, 4)?;
        wr.write_string(" ", 1)?;

        // accounting file number
        wr.write_int(0, 6)?;
        wr.write_string(" ", 1)?;

        wr.write_int(self.client.bank_code, BANK_CODE_WIDTH)
            .context("client bank code")?;
        wr.write_line_end()?;

        for (idx, group) in self.groups.iter().enumerate() {
            group
                .write_to(wr)
                .with_context(|| format!("group {}", idx + 1))?;
        }

        wr.write_string("5 +", 3)?;
        wr.write_line_end()
    }
}
