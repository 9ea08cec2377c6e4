//! Defect and advisory types produced by the transform pipeline.
//!
//! The `Display` text of every variant is the exact message shown to the user.

use std::fmt;

use chrono::NaiveDate;
use strum_macros::Display;
use thiserror::Error;

/// Coarse classification of a [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// Text does not decode as JSON. Fatal to the run.
    MalformedInput,
    /// Decoded document is not an array. Fatal to the run.
    ShapeError,
    /// A single row is unusable. Every row is still scanned.
    RowError,
}

/// What is wrong with one row of the input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    NotAnObject,
    InvalidDate,
    InvalidMorning,
    InvalidNight,
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "must be an object."),
            Self::InvalidDate => write!(f, "has an invalid date. Use YYYY-MM-DD."),
            Self::InvalidMorning => write!(f, "is missing a valid morning weight."),
            Self::InvalidNight => write!(f, "is missing a valid night weight."),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid JSON. Check commas, quotes, and brackets.")]
    MalformedInput,

    #[error("JSON must be an array of weigh-in records.")]
    ShapeError,

    /// `row` is 1-based, as displayed to the user.
    #[error("Row {row} {defect}")]
    Row { row: usize, defect: RowDefect },
}

impl TransformError {
    pub fn row(row: usize, defect: RowDefect) -> Self {
        Self::Row { row, defect }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput => ErrorKind::MalformedInput,
            Self::ShapeError => ErrorKind::ShapeError,
            Self::Row { .. } => ErrorKind::RowError,
        }
    }

    /// Document-level failures stop the pipeline before any row is looked at.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.kind(), ErrorKind::RowError)
    }
}

/// Advisory findings on an otherwise clean series. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesWarning {
    DuplicateDate { date: NaiveDate },
    DateGap { from: NaiveDate, to: NaiveDate },
}

impl fmt::Display for SeriesWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDate { date } => write!(f, "Duplicate date detected: {}.", date),
            Self::DateGap { from, to } => write!(f, "Gap detected between {} and {}.", from, to),
        }
    }
}
