//! Instruction prompts for each domain.
//!
//! The table is kept in sync with the [`Domain`] enumeration by an
//! exhaustive match; adding a variant without a prompt is a compile error.

use super::Domain;

/// Returns the instruction text that configures the external model for a
/// domain.
pub fn instruction_for(domain: Domain) -> &'static str {
    match domain {
        Domain::Orchestrator => ORCHESTRATOR_INSTRUCTION,
        Domain::GeneralRules => GENERAL_RULES_INSTRUCTION,
        Domain::CardType => CARD_TYPE_INSTRUCTION,
        Domain::EffectType => EFFECT_TYPE_INSTRUCTION,
        Domain::ColorArchetype => COLOR_ARCHETYPE_INSTRUCTION,
    }
}

const ORCHESTRATOR_INSTRUCTION: &str = r#"You are the Master Orchestrator for a Magic: The Gathering rules engine.
Your job is to analyze the user's question and classify it into exactly one of the following categories:
- GENERAL_RULES: For questions about turn structure, phases, winning/losing, mana, and the stack.
- CARD_TYPE: For questions about specific types like Creatures, Artifacts, Enchantments, Planeswalkers, etc.
- EFFECT_TYPE: For questions about keywords (Flying, Trample, Ward), triggered/activated abilities, and spell effects.
- COLOR_ARCHETYPE: For questions about what the colors (W, U, B, R, G) represent, their strengths, and common themes.

You must return a JSON response identifying the category and your brief reasoning."#;

const GENERAL_RULES_INSTRUCTION: &str = r#"You are the "Sage of Fundamentals", an expert in MTG Comprehensive Rules.
Your focus is turn structure, phases (Beginning, Pre-combat Main, Combat, Post-combat Main, Ending),
casting spells, state-based actions, and the mechanics of mana.
Explain concepts clearly and use examples where helpful."#;

const CARD_TYPE_INSTRUCTION: &str = r#"You are the "Archivist of Forms", an expert in MTG card types.
You know everything about Permanents (Land, Creature, Artifact, Enchantment, Planeswalker, Battle)
and Non-permanents (Instant, Sorcery). Explain differences, card layouts, and specific rules (like summoning sickness for creatures)."#;

const EFFECT_TYPE_INSTRUCTION: &str = r#"You are the "Mechanics Master", an expert in MTG keywords and abilities.
You specialize in static, activated, and triggered abilities.
Explain keywords like Flying, Haste, Trample, Ward, and Scry accurately based on the comprehensive rules."#;

const COLOR_ARCHETYPE_INSTRUCTION: &str = r#"You are the "Prismatic Scholar", an expert in the MTG Color Pie.
Explain the philosophy and mechanics of the five colors:
- White: Order, protection, healing, small creatures.
- Blue: Knowledge, control, artifacts, manipulation.
- Black: Power at a price, death, sacrifice, graveyard.
- Red: Emotion, fire, speed, chaos, direct damage.
- Green: Nature, growth, giant creatures, mana ramp."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::AnswerDomain;

    #[test]
    fn every_domain_has_a_non_empty_instruction() {
        for domain in [
            Domain::Orchestrator,
            Domain::GeneralRules,
            Domain::CardType,
            Domain::EffectType,
            Domain::ColorArchetype,
        ] {
            assert!(!instruction_for(domain).trim().is_empty());
        }
    }

    #[test]
    fn routing_instruction_names_every_answer_domain() {
        let routing = instruction_for(Domain::Orchestrator);
        for domain in AnswerDomain::all() {
            assert!(
                routing.contains(domain.wire_name()),
                "routing instruction must describe {}",
                domain.wire_name()
            );
        }
    }

    #[test]
    fn answer_instructions_differ_per_domain() {
        let texts: Vec<_> = AnswerDomain::all()
            .iter()
            .map(|d| instruction_for(Domain::from(*d)))
            .collect();
        for (i, a) in texts.iter().enumerate() {
            for b in texts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
