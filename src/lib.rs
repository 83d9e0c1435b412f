// ABOUTME: Root module for reckon - prompt comparison and tool-enhanced reasoning.
// ABOUTME: Re-exports the error type; see the prelude for common imports.

pub mod compare;
pub mod config;
pub mod error;
pub mod llm;
pub mod prelude;
pub mod reasoning;
pub mod tool;
pub mod tools;

pub use error::ReckonError;
