// crates/shared-kernel/src/value_objects/provenance.rs
use chrono::NaiveDate;

use super::sentinel::NOT_AVAILABLE;

/// Last accepted change of a document according to version control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Provenance {
    Known { date: NaiveDate, author: String },
    #[default]
    Unknown,
}

impl Provenance {
    pub fn known(date: NaiveDate, author: impl Into<String>) -> Self {
        Self::Known { date, author: author.into() }
    }

    pub const fn unknown() -> Self {
        Self::Unknown
    }

    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    /// `YYYY-MM-DD`, or the sentinel.
    pub fn date_field(&self) -> String {
        match self {
            Self::Known { date, .. } => date.format("%Y-%m-%d").to_string(),
            Self::Unknown => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn author_field(&self) -> String {
        match self {
            Self::Known { author, .. } => author.clone(),
            Self::Unknown => NOT_AVAILABLE.to_string(),
        }
    }

    /// The `(date, author)` pair as written to the catalog.
    pub fn fields(&self) -> (String, String) {
        (self.date_field(), self.author_field())
    }
}
