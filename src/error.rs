//! Error types for team construction and search
//!
//! Validation errors come from Team construction and required-member
//! checks. Configuration errors come from search invocation.

use thiserror::Error;

/// Broad category of a [`TeamError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TeamError {
    #[error("team must have {expected} cookies, got {got}")]
    TeamSize { expected: &'static str, got: usize },

    #[error("team cannot have duplicate cookie: {0}")]
    DuplicateCookie(String),

    #[error("team cannot have duplicate treasure: {0}")]
    DuplicateTreasure(String),

    #[error("team can have maximum 3 treasures, got {0}")]
    TooManyTreasures(usize),

    #[error("too many required cookies: {0}, maximum is 5")]
    TooManyRequired(usize),

    #[error("required cookies not found: {}", .0.join(", "))]
    RequiredNotFound(Vec<String>),

    #[error("cookies not found: {}", .0.join(", "))]
    CookieNotFound(Vec<String>),

    #[error("treasures not found: {}", .0.join(", "))]
    TreasureNotFound(Vec<String>),

    #[error("unknown strategy: {0} (use random, greedy, genetic, synergy or exhaustive)")]
    UnknownStrategy(String),

    #[error("not enough cookies to fill team: need {needed}, have {available}")]
    InsufficientPool { needed: usize, available: usize },

    #[error("exhaustive search would generate {combinations} teams (limit {limit}); confirmation required")]
    ExhaustiveLimit { combinations: u128, limit: u128 },

    #[error("unknown boss: {0}")]
    UnknownBoss(String),

    #[error("unknown export format: {0} (use json or csv)")]
    UnknownExportFormat(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TeamError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TeamError::TeamSize { .. }
            | TeamError::DuplicateCookie(_)
            | TeamError::DuplicateTreasure(_)
            | TeamError::TooManyTreasures(_)
            | TeamError::TooManyRequired(_)
            | TeamError::RequiredNotFound(_)
            | TeamError::CookieNotFound(_)
            | TeamError::TreasureNotFound(_) => ErrorKind::Validation,
            TeamError::UnknownStrategy(_)
            | TeamError::InsufficientPool { .. }
            | TeamError::ExhaustiveLimit { .. }
            | TeamError::UnknownBoss(_)
            | TeamError::UnknownExportFormat(_)
            | TeamError::InvalidConfig(_) => ErrorKind::Configuration,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

pub type Result<T> = std::result::Result<T, TeamError>;
