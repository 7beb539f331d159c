/// Severity buckets tracked by the report.
///
/// The alert API also emits informational and note-level severities; those
/// fall outside the four tracked buckets and are excluded from every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Maps an API severity string to a tracked bucket.
    /// Returns `None` for anything outside the four tracked severities.
    pub fn parse(value: &str) -> Option<Severity> {
        match value.to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Alert counts per severity bucket for one branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertTally {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl AlertTally {
    /// Partitions raw severity strings into the four buckets.
    pub fn from_severities<'a, I>(severities: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = AlertTally::default();
        for value in severities {
            match Severity::parse(value) {
                Some(Severity::Critical) => tally.critical += 1,
                Some(Severity::High) => tally.high += 1,
                Some(Severity::Medium) => tally.medium += 1,
                Some(Severity::Low) => tally.low += 1,
                None => {}
            }
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}

/// Outcome of the alert fetch for one branch.
///
/// The three cases are deliberately explicit: a failed alert fetch with
/// Advanced Security still enabled is reported as `Unavailable` instead of
/// being silently zero-filled, so a blank row can never be mistaken for a
/// clean one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Alert fetch succeeded; counts are authoritative.
    Counted(AlertTally),
    /// Alert fetch failed and the enablement check confirmed Advanced
    /// Security is off for the repository.
    Disabled,
    /// Alert fetch failed while enablement is on or could not be confirmed.
    /// `enabled` carries the enablement answer when one was obtained.
    Unavailable { enabled: Option<bool> },
}

impl AlertOutcome {
    /// Counts for the report row; zero-filled outside the `Counted` case.
    pub fn tally(&self) -> AlertTally {
        match self {
            AlertOutcome::Counted(tally) => *tally,
            AlertOutcome::Disabled | AlertOutcome::Unavailable { .. } => AlertTally::default(),
        }
    }

    /// Enablement posture for the report row. `None` means the check itself
    /// did not produce an answer.
    pub fn enabled(&self) -> Option<bool> {
        match self {
            AlertOutcome::Counted(_) => Some(true),
            AlertOutcome::Disabled => Some(false),
            AlertOutcome::Unavailable { enabled } => *enabled,
        }
    }

    /// Whether the commit lookup should run for this branch. Confirmed
    /// disabled repositories short-circuit straight to a zero row.
    pub fn wants_commit_lookup(&self) -> bool {
        !matches!(self, AlertOutcome::Disabled)
    }
}
