//! Text generation capability for prospect-rs
//!
//! This crate wraps LLM services behind a single narrow interface:
//! [`TextGenerator::generate`] takes a prompt and returns text. Nothing in
//! the workspace depends on any stronger contract than "returns text
//! eventually, may fail transiently, may be non-deterministic".
//!
//! The bundled [`providers::OpenAIProvider`] speaks the OpenAI
//! chat-completions wire format and accepts a custom `api_base`, which
//! covers hosted OpenAI as well as local OpenAI-compatible servers
//! (Ollama, llama.cpp, vLLM).

pub mod error;
pub mod generation;
pub mod provider;
pub mod providers;

pub use error::{LLMError, Result};
pub use generation::GenerationRequest;
pub use provider::TextGenerator;
