//! Workflow status classification
//!
//! The `status` action input is usually `${{ job.status }}`. Matching is
//! case-insensitive; anything unrecognized (including an empty string)
//! falls into `Unknown`.

/// Workflow outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Status {
    Success,
    Failure,
    Cancelled,
    Unknown,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl Status {
    /// Classify a status keyword. Total over all inputs.
    pub fn parse(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "success" => Status::Success,
            "failure" => Status::Failure,
            "cancelled" => Status::Cancelled,
            _ => Status::Unknown,
        }
    }

    /// Attachment sidebar color
    pub fn color(&self) -> &'static str {
        match self {
            Status::Success => "#2cbe4e",
            Status::Failure => "#cb2431",
            Status::Cancelled => "#ffc107",
            // Slack's named "warning" color
            Status::Unknown => "warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Success => "✅",
            Status::Failure => "❌",
            Status::Cancelled => "⚠️",
            Status::Unknown => "🟡",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Status::Success => "completed",
            Status::Failure => "failed",
            Status::Cancelled => "cancelled",
            Status::Unknown => "Unknown",
        }
    }
}
