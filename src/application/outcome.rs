//! Result origin tagging for degraded-mode observability.

use serde::{Deserialize, Serialize};

/// Where a client result came from.
///
/// Both the classifier and the dispatcher recover provider failures into
/// fixed fallback content so the workflow always proceeds; this tag lets
/// callers and tests distinguish a degraded result from a real one without
/// changing the conversational surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrigin {
    /// Produced by the external model.
    Model,
    /// Substituted locally after a transport or parse failure.
    Fallback,
}

impl ResultOrigin {
    /// Returns true if this result was substituted locally.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResultOrigin::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_flagged() {
        assert!(ResultOrigin::Fallback.is_fallback());
        assert!(!ResultOrigin::Model.is_fallback());
    }
}
