// ABOUTME: LLM module - client abstraction for text-completion providers.
// ABOUTME: Defines types, the client trait, providers, and the completion wrapper.

mod client;
mod completion;
mod gemini;
mod mock;
mod openai;
mod types;

pub use client::*;
pub use completion::*;
pub use gemini::*;
pub use mock::*;
pub use openai::*;
pub use types::*;
