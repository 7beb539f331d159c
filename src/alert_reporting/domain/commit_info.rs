use chrono::{DateTime, Utc};

/// Placeholder rendered when commit metadata could not be retrieved.
pub const NOT_AVAILABLE: &str = "N/A";

/// Author name and date of the most recent commit on a branch.
///
/// A failed lookup degrades to `unavailable()` rather than dropping the row;
/// a row with valid alert data and unknown commit info is still complete.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitInfo {
    author: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl CommitInfo {
    pub fn new(author: String, date: DateTime<Utc>) -> Self {
        Self {
            author: Some(author),
            date: Some(date),
        }
    }

    /// Builds commit info from whatever fields the payload carried.
    /// Missing fields render as the `N/A` sentinel.
    pub fn from_parts(author: Option<String>, date: Option<DateTime<Utc>>) -> Self {
        Self { author, date }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn author_display(&self) -> String {
        self.author
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn date_display(&self) -> String {
        self.date
            .map(|d| d.to_rfc3339())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}
