// ABOUTME: Model variants simulated by rephrasing one prompt - base, instruct,
// ABOUTME: and fine-tuned framings - plus their static characteristics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static description of a model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Characteristics {
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub best_for: &'static [&'static str],
    pub example_models: &'static [&'static str],
}

static BASE: Characteristics = Characteristics {
    description: "Pre-trained models without specific instruction tuning",
    strengths: &[
        "Creative text generation",
        "Diverse outputs",
        "Good general knowledge",
    ],
    weaknesses: &[
        "May not follow instructions precisely",
        "Inconsistent formatting",
    ],
    best_for: &[
        "Creative writing",
        "Text completion",
        "Exploratory generation",
    ],
    example_models: &["Qwen2.5-3B-Base", "Llama-3-8B-Base"],
};

static INSTRUCT: Characteristics = Characteristics {
    description: "Models fine-tuned to follow instructions and provide helpful responses",
    strengths: &[
        "Better instruction following",
        "Consistent formatting",
        "Safer outputs",
    ],
    weaknesses: &["May be less creative", "More constrained responses"],
    best_for: &[
        "Question answering",
        "Task completion",
        "Structured outputs",
    ],
    example_models: &["Qwen2.5-3B-Instruct", "Llama-3-8B-Instruct"],
};

static FINE_TUNED: Characteristics = Characteristics {
    description: "Models specialized for specific domains or tasks",
    strengths: &["High performance on target tasks", "Domain expertise"],
    weaknesses: &[
        "Limited to specific use cases",
        "May perform poorly outside domain",
    ],
    best_for: &["Specialized applications", "Domain-specific tasks"],
    example_models: &["Code-Qwen2.5-3B", "Medical-Llama-7B"],
};

/// A prompt framing that stands in for a model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    Base,
    Instruct,
    FineTuned,
}

impl ModelVariant {
    /// Every variant, in query order.
    pub const ALL: [ModelVariant; 3] = [
        ModelVariant::Base,
        ModelVariant::Instruct,
        ModelVariant::FineTuned,
    ];

    /// Rephrase `prompt` for this variant.
    pub fn wrap(&self, prompt: &str) -> String {
        match self {
            ModelVariant::Base => format!("Complete this text creatively: {}", prompt),
            ModelVariant::Instruct => format!(
                "Please provide a helpful and structured response to: {}",
                prompt
            ),
            ModelVariant::FineTuned => format!(
                "As a specialized assistant, provide a detailed and accurate response to: {}",
                prompt
            ),
        }
    }

    /// Key used in saved reports.
    pub fn key(&self) -> &'static str {
        match self {
            ModelVariant::Base => "base",
            ModelVariant::Instruct => "instruct",
            ModelVariant::FineTuned => "fine_tuned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelVariant::Base => "BASE",
            ModelVariant::Instruct => "INSTRUCT",
            ModelVariant::FineTuned => "FINE TUNED",
        }
    }

    pub fn characteristics(&self) -> &'static Characteristics {
        match self {
            ModelVariant::Base => &BASE,
            ModelVariant::Instruct => &INSTRUCT,
            ModelVariant::FineTuned => &FINE_TUNED,
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
