//! Result of looking a player up on the game service.

use serde_json::Value;

use crate::metrics::ProfileMetrics;

/// What a player search returned.
///
/// Private and not-found players both extract to zero metrics; telling them
/// apart is left to whoever renders the result.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupOutcome {
    /// Player found with stats visible
    FoundPublic(Value),
    /// Player found but stats are hidden
    FoundPrivate,
    NotFound,
    /// The service could not be reached or answered with an error
    TransientError(String),
}

impl LookupOutcome {
    pub fn document(&self) -> Option<&Value> {
        match self {
            LookupOutcome::FoundPublic(document) => Some(document),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(
            self,
            LookupOutcome::FoundPublic(_) | LookupOutcome::FoundPrivate
        )
    }

    /// Worth asking again later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LookupOutcome::TransientError(_))
    }

    pub fn metrics(&self) -> ProfileMetrics {
        ProfileMetrics::extract(self.document())
    }
}
