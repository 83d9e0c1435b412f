// ABOUTME: Tool module - literal values, call parsing, registries, dispatch.
// ABOUTME: Core of the TOOL_CALL protocol used by the reasoning pipeline.

mod dispatch;
mod literal;
mod parser;
mod registry;
mod value;

pub use dispatch::*;
pub use literal::*;
pub use parser::*;
pub use registry::*;
pub use value::*;

#[cfg(test)]
mod dispatch_test;
#[cfg(test)]
mod literal_test;
#[cfg(test)]
mod registry_test;
