// ABOUTME: Built-in tool catalogs exposed to the reasoning model.
// ABOUTME: `math` holds arithmetic and statistics, `string` text analysis.

pub mod math;
pub mod string;

use std::sync::LazyLock;

use crate::tool::Registry;

static MATH_REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| Registry::new("math", math::MATH_TOOLS));
static STRING_REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| Registry::new("string", string::STRING_TOOLS));

/// The shared `math` registry.
pub fn math_registry() -> &'static Registry {
    &MATH_REGISTRY
}

/// The shared `string` registry.
pub fn string_registry() -> &'static Registry {
    &STRING_REGISTRY
}

#[cfg(test)]
mod string_test;
