//! Fixed-width field codec.
//!
//! Every ABO/GPC record is a run of fixed columns. [`FieldReader`] and
//! [`FieldWriter`] move a cursor over a byte stream one column at a time and
//! always consume exactly the declared width: short values are padded, long
//! strings are truncated, and reserved columns are skipped without looking
//! at their content.

use crate::decimal::Amount;
use crate::error::{AboError, Result};
use chrono::NaiveDate;
use encoding::all::WINDOWS_1250;
use encoding::{DecoderTrap, EncoderTrap, Encoding};
use std::io::{self, BufRead, Write};

/// `DDMMYY` layout shared by every date column.
const DATE_FORMAT: &str = "%d%m%y";

/// Width of a date column.
pub const DATE_WIDTH: usize = 6;

/// Reads typed fields from a buffered byte stream.
pub struct FieldReader<R> {
    inner: R,
    offset: u64,
}

impl<R: BufRead> FieldReader<R> {
    /// Wraps a buffered stream positioned at the start of a record.
    pub fn new(inner: R) -> Self {
        FieldReader { inner, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns `true` when no more bytes are available.
    pub fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.inner.fill_buf()?.is_empty())
    }

    /// Consumes exactly `width` bytes.
    fn take(&mut self, width: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; width];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.offset += width as u64;
                Ok(buf)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(AboError::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads an ASCII column and trims surrounding whitespace.
    pub fn read_string(&mut self, width: usize) -> Result<String> {
        let buf = self.take(width)?;
        let text = String::from_utf8(buf)
            .map_err(|e| AboError::Encoding(format!("column is not ASCII text: {}", e)))?;
        Ok(text.trim().to_string())
    }

    /// Reads a windows-1250 column, transcodes it and trims surrounding whitespace.
    pub fn read_windows1250_string(&mut self, width: usize) -> Result<String> {
        let buf = self.take(width)?;
        let text = WINDOWS_1250
            .decode(&buf, DecoderTrap::Strict)
            .map_err(|e| AboError::Encoding(format!("invalid windows-1250 text: {}", e)))?;
        Ok(text.trim().to_string())
    }

    /// Reads a (possibly zero padded) unsigned decimal integer.
    pub fn read_int(&mut self, width: usize) -> Result<u64> {
        let text = self.read_string(width)?;
        text.parse::<u64>()
            .map_err(|_| AboError::Format(format!("'{}' is not a valid integer", text)))
    }

    /// Reads an integer count of minor units and scales it to an [`Amount`].
    pub fn read_amount(&mut self, width: usize) -> Result<Amount> {
        let units = self.read_int(width)?;
        let units = i64::try_from(units)
            .map_err(|_| AboError::Format(format!("amount {} is out of range", units)))?;
        Ok(Amount::from_minor_units(units))
    }

    /// Reads a `DDMMYY` date.
    ///
    /// Years `00`-`69` map to 20xx, `70`-`99` to 19xx.
    pub fn read_date(&mut self) -> Result<NaiveDate> {
        let text = self.read_string(DATE_WIDTH)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map_err(|_| AboError::Format(format!("'{}' is not a valid DDMMYY date", text)))
    }

    /// Reads a single raw byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Skips a reserved column without validating its content.
    pub fn skip(&mut self, width: usize) -> Result<()> {
        self.take(width).map(|_| ())
    }

    /// Consumes an optional `\r` followed by an optional `\n`.
    ///
    /// Accepts CR/LF and LF terminated files as well as a final record
    /// without any terminator.
    pub fn skip_line_end(&mut self) -> Result<()> {
        for expected in [b'\r', b'\n'] {
            let next = self.inner.fill_buf()?.first().copied();
            if next == Some(expected) {
                self.inner.consume(1);
                self.offset += 1;
            }
        }
        Ok(())
    }
}

/// Writes typed fields as fixed-width columns.
pub struct FieldWriter<W> {
    inner: W,
}

impl<W: Write> FieldWriter<W> {
    /// Wraps an output sink.
    pub fn new(inner: W) -> Self {
        FieldWriter { inner }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes `bytes` truncated or right-padded with spaces to `width`.
    fn write_bytes(&mut self, bytes: &[u8], width: usize) -> Result<()> {
        if bytes.len() >= width {
            self.inner.write_all(&bytes[..width])?;
            return Ok(());
        }

        let mut column = Vec::with_capacity(width);
        column.extend_from_slice(bytes);
        column.resize(width, b' ');
        self.inner.write_all(&column)?;
        Ok(())
    }

    /// Writes an ASCII string, silently truncated or space padded to `width`.
    pub fn write_string(&mut self, s: &str, width: usize) -> Result<()> {
        self.write_bytes(s.as_bytes(), width)
    }

    /// Transcodes to windows-1250, then writes like [`FieldWriter::write_string`].
    pub fn write_windows1250_string(&mut self, s: &str, width: usize) -> Result<()> {
        let bytes = WINDOWS_1250
            .encode(s, EncoderTrap::Strict)
            .map_err(|e| AboError::Encoding(format!("cannot encode '{}' as windows-1250: {}", s, e)))?;
        self.write_bytes(&bytes, width)
    }

    /// Writes an integer left-padded with zeros.
    ///
    /// Fails with [`AboError::Overflow`] if the value needs more than `width` digits.
    pub fn write_int(&mut self, value: u64, width: usize) -> Result<()> {
        let digits = value.to_string();
        if digits.len() > width {
            return Err(AboError::Overflow { value, width });
        }
        write!(self.inner, "{:0>width$}", digits, width = width)?;
        Ok(())
    }

    /// Writes an amount as a zero-padded count of minor units.
    ///
    /// Digits below a hundredth are truncated, not rounded.
    pub fn write_amount(&mut self, amount: Amount, width: usize) -> Result<()> {
        if amount.is_negative() {
            return Err(AboError::Format(format!(
                "negative amount {} cannot be written",
                amount
            )));
        }
        let units = amount
            .to_minor_units()
            .and_then(|units| u64::try_from(units).ok())
            .ok_or_else(|| AboError::Format(format!("amount {} is out of range", amount)))?;
        self.write_int(units, width)
    }

    /// Writes a `DDMMYY` date.
    pub fn write_date(&mut self, date: NaiveDate) -> Result<()> {
        let text = date.format(DATE_FORMAT).to_string();
        self.write_string(&text, DATE_WIDTH)
    }

    /// Writes the record terminator.
    pub fn write_line_end(&mut self) -> Result<()> {
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
