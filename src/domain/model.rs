/// Printed before the request is made, whatever its outcome.
pub const BANNER: &str = "🚀 Deine Startumgebung ist bereit!";
pub const SUCCESS_MESSAGE: &str = "✅ Verbindung zu GitHub erfolgreich!";
pub const FAILURE_MESSAGE: &str = "❌ Fehler bei der Verbindung.";

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success,
    Failure,
}

impl ProbeOutcome {
    /// Only an exact 200 counts as success; other 2xx codes do not.
    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            ProbeOutcome::Success
        } else {
            ProbeOutcome::Failure
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProbeOutcome::Success => SUCCESS_MESSAGE,
            ProbeOutcome::Failure => FAILURE_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub endpoint: String,
    pub status: u16,
    pub outcome: ProbeOutcome,
}
