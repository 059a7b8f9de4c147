//! Invalid-input errors for identity claims.
//!
//! These are rejections of what the user typed, distinct from a claim that is
//! well formed but matches nobody on the roster.

use std::fmt;

use thiserror::Error;

/// Which of the two name initials an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialPosition {
    First,
    Last,
}

impl fmt::Display for InitialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// A name field was empty or whitespace only, so no initial can be taken.
    ///
    /// # Fields
    /// - Name of the field (`first name`, `last name`, `teacher name`)
    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    /// An initial is not an uppercase Latin letter A-Z.
    #[error("{position} initial not an uppercase character")]
    InvalidInitial {
        position: InitialPosition,
        value: char,
    },

    /// Grade is outside the six supported grades (7 through 12).
    #[error("grade must be between 7 and 12, got {0}")]
    GradeOutOfRange(i64),
}
