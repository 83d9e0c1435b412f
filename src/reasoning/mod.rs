// ABOUTME: Tool-enhanced reasoning - prompts a model to think step by step,
// ABOUTME: runs the TOOL_CALLs it emits, and asks for a final answer.

mod prompt;
mod reasoner;
mod render;

pub use prompt::*;
pub use reasoner::*;
pub use render::*;

#[cfg(test)]
mod prompt_test;
#[cfg(test)]
mod render_test;
