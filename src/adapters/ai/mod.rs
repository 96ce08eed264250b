//! AI provider adapters.
//!
//! Implementations of the `AIProvider` port: the production Gemini client
//! and a configurable mock for tests.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
