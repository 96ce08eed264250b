//! Domain enumeration for question routing.
//!
//! Five fixed domains: one routing domain used only by the classifier, and
//! four answer domains each backed by a specialist instruction prompt.
//! `AnswerDomain` is a separate type so that classification output can never
//! name the routing domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five fixed domains a question can be routed to or answered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    /// Routing domain: classifies questions, never answers them.
    Orchestrator,
    /// Turn structure, phases, winning/losing, mana, the stack.
    GeneralRules,
    /// Card types: permanents, non-permanents, their specific rules.
    CardType,
    /// Keywords, triggered/activated abilities, spell effects.
    EffectType,
    /// The five colors, their philosophy and common themes.
    ColorArchetype,
}

impl Domain {
    /// Returns true if this is the routing domain.
    pub fn is_routing(&self) -> bool {
        matches!(self, Domain::Orchestrator)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Orchestrator => "Orchestrator",
            Domain::GeneralRules => "General Rules",
            Domain::CardType => "Card Types",
            Domain::EffectType => "Effect Types",
            Domain::ColorArchetype => "Color Archetypes",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<AnswerDomain> for Domain {
    fn from(domain: AnswerDomain) -> Self {
        match domain {
            AnswerDomain::GeneralRules => Domain::GeneralRules,
            AnswerDomain::CardType => Domain::CardType,
            AnswerDomain::EffectType => Domain::EffectType,
            AnswerDomain::ColorArchetype => Domain::ColorArchetype,
        }
    }
}

/// The four domains capable of producing user-facing answers.
///
/// Classification output is typed against this enum, so the routing domain
/// is unrepresentable as a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerDomain {
    GeneralRules,
    CardType,
    EffectType,
    ColorArchetype,
}

impl AnswerDomain {
    /// Returns all answer domains in canonical order.
    pub fn all() -> &'static [AnswerDomain] {
        &[
            AnswerDomain::GeneralRules,
            AnswerDomain::CardType,
            AnswerDomain::EffectType,
            AnswerDomain::ColorArchetype,
        ]
    }

    /// Returns the wire name used in classification payloads.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AnswerDomain::GeneralRules => "GENERAL_RULES",
            AnswerDomain::CardType => "CARD_TYPE",
            AnswerDomain::EffectType => "EFFECT_TYPE",
            AnswerDomain::ColorArchetype => "COLOR_ARCHETYPE",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        Domain::from(*self).display_name()
    }
}

impl fmt::Display for AnswerDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AnswerDomain {
    type Err = UnknownDomain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GENERAL_RULES" => Ok(AnswerDomain::GeneralRules),
            "CARD_TYPE" => Ok(AnswerDomain::CardType),
            "EFFECT_TYPE" => Ok(AnswerDomain::EffectType),
            "COLOR_ARCHETYPE" => Ok(AnswerDomain::ColorArchetype),
            other => Err(UnknownDomain(other.to_string())),
        }
    }
}

impl TryFrom<Domain> for AnswerDomain {
    type Error = UnknownDomain;

    /// Fails only for the routing domain.
    fn try_from(domain: Domain) -> Result<Self, Self::Error> {
        match domain {
            Domain::Orchestrator => Err(UnknownDomain("ORCHESTRATOR".to_string())),
            Domain::GeneralRules => Ok(AnswerDomain::GeneralRules),
            Domain::CardType => Ok(AnswerDomain::CardType),
            Domain::EffectType => Ok(AnswerDomain::EffectType),
            Domain::ColorArchetype => Ok(AnswerDomain::ColorArchetype),
        }
    }
}

/// A string that does not name an answer domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an answer domain")]
pub struct UnknownDomain(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_4_answer_domains() {
        assert_eq!(AnswerDomain::all().len(), 4);
    }

    #[test]
    fn exactly_one_routing_domain_exists() {
        let routing: Vec<_> = [
            Domain::Orchestrator,
            Domain::GeneralRules,
            Domain::CardType,
            Domain::EffectType,
            Domain::ColorArchetype,
        ]
        .into_iter()
        .filter(Domain::is_routing)
        .collect();
        assert_eq!(routing, vec![Domain::Orchestrator]);
    }

    #[test]
    fn answer_domains_convert_to_non_routing_domains() {
        for domain in AnswerDomain::all() {
            assert!(!Domain::from(*domain).is_routing());
        }
    }

    #[test]
    fn routing_domain_is_not_an_answer_domain() {
        assert!(AnswerDomain::try_from(Domain::Orchestrator).is_err());
    }

    #[test]
    fn every_non_routing_domain_is_an_answer_domain() {
        for domain in AnswerDomain::all() {
            let roundtrip = AnswerDomain::try_from(Domain::from(*domain)).unwrap();
            assert_eq!(roundtrip, *domain);
        }
    }

    #[test]
    fn wire_names_parse_back() {
        for domain in AnswerDomain::all() {
            let parsed: AnswerDomain = domain.wire_name().parse().unwrap();
            assert_eq!(parsed, *domain);
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        assert!("ORCHESTRATOR".parse::<AnswerDomain>().is_err());
        assert!("BANDING".parse::<AnswerDomain>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&AnswerDomain::CardType).unwrap();
        assert_eq!(json, "\"CARD_TYPE\"");

        let parsed: AnswerDomain = serde_json::from_str("\"EFFECT_TYPE\"").unwrap();
        assert_eq!(parsed, AnswerDomain::EffectType);
    }
}
