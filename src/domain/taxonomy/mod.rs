//! Taxonomy - The fixed category space for question routing.
//!
//! One routing domain, four answer domains, and the static instruction
//! table that configures the external model per domain.

mod domain;
mod prompts;

pub use domain::{AnswerDomain, Domain, UnknownDomain};
pub use prompts::instruction_for;
