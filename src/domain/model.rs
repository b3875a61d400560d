use crate::utils::error::Result;
use crate::utils::validation::narrow_to_i32;
use std::fmt;
use std::io::Write;

/// A number paired with a piece of text. Any value of either field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    number: i32,
    text: String,
}

impl Record {
    pub fn new(number: i32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Builds a record from a wide integer. Values outside `i32` are rejected.
    pub fn try_new(number: i64, text: impl Into<String>) -> Result<Self> {
        Ok(Self::new(narrow_to_i32(number)?, text))
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn set_number(&mut self, number: i32) {
        tracing::trace!(old = self.number, new = number, "set_number");
        self.number = number;
    }

    /// Leaves the record untouched on failure.
    pub fn try_set_number(&mut self, number: i64) -> Result<()> {
        self.set_number(narrow_to_i32(number)?);
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        tracing::trace!(len = self.text.len(), "set_text");
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self)?;
        Ok(())
    }

    /// Prints the record as a single line on stdout.
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number: {}, Text: {}", self.number, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RecordError;

    #[test]
    fn test_new_keeps_values_verbatim() {
        let record = Record::new(-7, "  padded\ttext ");
        assert_eq!(record.number(), -7);
        assert_eq!(record.text(), "  padded\ttext ");
    }

    #[test]
    fn test_display_format() {
        let record = Record::new(42, "Hello, World!");
        assert_eq!(record.to_string(), "Number: 42, Text: Hello, World!");
    }

    #[test]
    fn test_display_does_not_escape_text() {
        let record = Record::new(1, "say \"hi\", bye");
        assert_eq!(record.to_string(), "Number: 1, Text: say \"hi\", bye");
    }

    #[test]
    fn test_try_set_number_out_of_range_keeps_old_value() {
        let mut record = Record::new(5, "x");
        let err = record.try_set_number(i64::MAX).unwrap_err();
        assert!(matches!(err, RecordError::NumberOutOfRange { .. }));
        assert_eq!(record.number(), 5);
        assert_eq!(record.text(), "x");
    }
}
