use crate::writer::WriterState;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`] values.
///
/// State and argument faults are caller bugs; `Io` covers everything the output sink reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IllegalState,
    IllegalArgument,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The writer is in an invalid state (actual: {actual}, expected: {expected})")]
    InvalidState {
        actual: WriterState,
        expected: WriterState,
    },

    #[error("Transition from state '{from}' to '{to}' is forbidden")]
    ForbiddenTransition { from: WriterState, to: WriterState },

    #[error("The writer is inside {depth} group(s). Close the group(s) first")]
    GroupsStillOpen { depth: usize },

    #[error("The writer isn't inside a group")]
    NotInsideGroup,

    #[error("The writer is already closed")]
    AlreadyClosed,

    #[error("The ({role}) node with given id '{id}' doesn't exist")]
    UnknownNode { role: &'static str, id: String },

    #[error("The given {what} ({value}) must be positive")]
    NonPositive { what: &'static str, value: f64 },

    #[error("The given {what} ({value}) must be positive or zero")]
    Negative { what: &'static str, value: f64 },

    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: &'static str },

    #[error("Unknown {vocabulary} value '{value}'")]
    UnknownValue {
        vocabulary: &'static str,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState { .. }
            | Self::ForbiddenTransition { .. }
            | Self::GroupsStillOpen { .. }
            | Self::NotInsideGroup
            | Self::AlreadyClosed => ErrorKind::IllegalState,
            Self::UnknownNode { .. }
            | Self::NonPositive { .. }
            | Self::Negative { .. }
            | Self::InvalidColor { .. }
            | Self::UnknownValue { .. } => ErrorKind::IllegalArgument,
            Self::Io(_) | Self::Xml(_) => ErrorKind::Io,
        }
    }
}

pub(crate) fn positive(what: &'static str, value: f64) -> Result<f64> {
    // NaN fails the comparison too.
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { what, value })
    }
}

pub(crate) fn non_negative(what: &'static str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Negative { what, value })
    }
}
