// File: crates/miniplot-core/src/message.rs
// Summary: Caller-facing status text returned for every chart call.

use std::fmt;

use crate::kind::ChartKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    /// The backend is missing or lacks the chart kind.
    NotLoaded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultMessage {
    pub outcome: Outcome,
    text: String,
}

impl ResultMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { outcome: Outcome::Success, text: text.into() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { outcome: Outcome::Failure, text: text.into() }
    }

    /// "Histogram chart function not loaded"
    pub fn not_loaded(kind: ChartKind) -> Self {
        Self { outcome: Outcome::NotLoaded, text: format!("{} chart function not loaded", kind.display_name()) }
    }

    /// "<slug> chart failed: <reason>"
    pub fn chart_failed(kind: ChartKind, reason: impl fmt::Display) -> Self {
        Self::failure(format!("{} chart failed: {reason}", kind.slug()))
    }

    pub fn is_success(&self) -> bool { self.outcome == Outcome::Success }

    pub fn text(&self) -> &str { &self.text }
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<ResultMessage> for String {
    fn from(m: ResultMessage) -> Self { m.text }
}
