use thiserror::Error;

/// Everything that can stop a calendar from being generated.
///
/// All variants are raised up front, before any date arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid year {0:?}: expected a positive whole number in the format YYYY")]
    InvalidYear(String),

    #[error("invalid month {0:?}: expected a whole number from 1 to 12")]
    InvalidMonth(String),

    #[error("invalid events: {0}")]
    InvalidEvents(String),

    #[error("invalid label format {0:?}: not a valid strftime pattern")]
    InvalidLabelFormat(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
