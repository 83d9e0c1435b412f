// ABOUTME: Model comparison - one prompt rephrased for base, instruct and
// ABOUTME: fine-tuned framings, sent to a local server and reported side by side.

mod comparator;
mod variant;

pub use comparator::*;
pub use variant::*;
