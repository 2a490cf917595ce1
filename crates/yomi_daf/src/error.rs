//! Error types for Daf Yomi calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use yomi_time::{CivilDate, TimeError};

/// Errors from Daf Yomi calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DafError {
    /// Requested date is before the first day of the first cycle.
    OutOfRange { date: CivilDate, epoch: CivilDate },
    /// Offset ran past the page table. Indicates a corrupted table or an
    /// offset computed outside `0..WHOLE_SHAS_PAGES`.
    TableExhausted { offset: i64 },
    /// Error from the Hebrew calendar.
    Time(TimeError),
}

impl Display for DafError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { date, epoch } => {
                write!(f, "date {date} is before the cycle epoch {epoch}")
            }
            Self::TableExhausted { offset } => {
                write!(f, "offset {offset} is outside the page table")
            }
            Self::Time(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for DafError {}

impl From<TimeError> for DafError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
