// ABOUTME: Comparator - runs one prompt under every model variant against a
// ABOUTME: local OpenAI-compatible server, then renders and saves the results.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::{debug, info};

use super::{Characteristics, ModelVariant};
use crate::config::ComparatorConfig;
use crate::error::{LlmError, ReckonError};
use crate::llm::{CompletionClient, CompletionFailure, CompletionOptions, CompletionResult, Usage};

const WIDE_RULE: usize = 80;
const RULE: usize = 50;
const NARROW_RULE: usize = 30;

/// Outcome of querying one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub model_type: ModelVariant,
    /// Wall-clock seconds, measured even when the call failed.
    pub response_time: f64,
    pub tokens: Usage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparisonResult {
    /// Convert a completion outcome, phrasing failures for the user.
    pub fn from_completion(variant: ModelVariant, result: CompletionResult, base_url: &str) -> Self {
        let response_time = result.elapsed.as_secs_f64();
        match result.outcome {
            Ok(completion) => Self {
                success: true,
                text: Some(completion.text),
                model_type: variant,
                response_time,
                tokens: completion.usage,
                error: None,
            },
            Err(failure) => Self {
                success: false,
                text: None,
                model_type: variant,
                response_time,
                tokens: Usage::default(),
                error: Some(describe_failure(&failure, base_url)),
            },
        }
    }

    pub fn response_time(&self) -> Duration {
        Duration::from_secs_f64(self.response_time)
    }
}

/// User-facing text for a failed completion.
pub fn describe_failure(failure: &CompletionFailure, base_url: &str) -> String {
    match failure {
        CompletionFailure::ConnectionError(_) => format!(
            "Cannot connect to LM Studio at {}. Make sure it's running.",
            base_url
        ),
        CompletionFailure::ApiError { status, .. } => format!("API error: {}", status),
        other => other.to_string(),
    }
}

/// Results for every variant of one prompt, in query order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub prompt: String,
    pub results: Vec<ComparisonResult>,
}

impl ComparisonReport {
    pub fn get(&self, variant: ModelVariant) -> Option<&ComparisonResult> {
        self.results.iter().find(|r| r.model_type == variant)
    }

    /// Variants that answered.
    pub fn successful(&self) -> Vec<ModelVariant> {
        self.results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.model_type)
            .collect()
    }
}

/// Serializes `(variant, value)` pairs as a map keyed by variant, keeping order.
struct VariantMap<'a, T>(Vec<(ModelVariant, &'a T)>);

impl<T: Serialize> Serialize for VariantMap<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (variant, value) in &self.0 {
            map.serialize_entry(variant.key(), value)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct SavedReport<'a> {
    prompt: &'a str,
    timestamp: f64,
    results: VariantMap<'a, ComparisonResult>,
    model_characteristics: VariantMap<'a, Characteristics>,
}

/// Queries a local server once per model variant.
pub struct Comparator {
    client: CompletionClient,
    options: CompletionOptions,
    base_url: String,
}

impl Comparator {
    /// Build a comparator talking to `config.base_url`.
    pub fn new(config: &ComparatorConfig) -> Result<Self, LlmError> {
        Ok(Self::with_client(config.completion_client()?, config))
    }

    /// Use an existing completion client.
    pub fn with_client(client: CompletionClient, config: &ComparatorConfig) -> Self {
        Self {
            client,
            options: config.options(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn run(&self, prompt: &str) -> ComparisonReport {
        self.run_with_progress(prompt, |_| {}).await
    }

    /// Query each variant in turn, calling `on_start` before each request.
    pub async fn run_with_progress<F>(&self, prompt: &str, mut on_start: F) -> ComparisonReport
    where
        F: FnMut(ModelVariant),
    {
        let mut results = Vec::with_capacity(ModelVariant::ALL.len());

        for variant in ModelVariant::ALL {
            on_start(variant);
            debug!(variant = %variant, "querying model variant");
            let completion = self.client.complete(&variant.wrap(prompt), &self.options).await;
            results.push(ComparisonResult::from_completion(
                variant,
                completion,
                &self.base_url,
            ));
        }

        ComparisonReport {
            prompt: prompt.to_string(),
            results,
        }
    }
}

/// Format every variant's outcome alongside its characteristics.
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"=".repeat(WIDE_RULE));
    out.push_str(&format!("\n📝 PROMPT: {}\n", report.prompt));
    out.push_str(&"=".repeat(WIDE_RULE));
    out.push('\n');

    for result in &report.results {
        let variant = result.model_type;
        out.push_str(&format!("\n🤖 {} MODEL\n", variant.label()));
        out.push_str(&"-".repeat(RULE));
        out.push('\n');

        match (&result.text, &result.error) {
            (Some(text), _) if result.success => {
                out.push_str(&format!("Response: {}\n", text));
                out.push_str(&format!("Response Time: {:.2}s\n", result.response_time));
                if result.tokens.total_tokens > 0 {
                    out.push_str(&format!("Tokens Used: {}\n", result.tokens.total_tokens));
                }
            }
            (_, error) => {
                out.push_str(&format!(
                    "❌ Error: {}\n",
                    error.as_deref().unwrap_or("Unknown error")
                ));
            }
        }

        let characteristics = variant.characteristics();
        out.push_str("\n📋 Model Characteristics:\n");
        out.push_str(&describe_characteristics(characteristics));
    }

    out
}

fn describe_characteristics(characteristics: &Characteristics) -> String {
    format!(
        "Description: {}\nStrengths: {}\nBest for: {}\n",
        characteristics.description,
        characteristics.strengths.join(", "),
        characteristics.best_for.join(", ")
    )
}

/// Which variants answered, and how to choose between them.
pub fn render_recommendations(report: &ComparisonReport) -> String {
    let mut out = String::from("\n💡 RECOMMENDATIONS\n");
    out.push_str(&"-".repeat(NARROW_RULE));
    out.push('\n');

    let successful = report.successful();
    if successful.is_empty() {
        out.push_str("❌ No models responded successfully. Check if LM Studio is running.\n");
        return out;
    }

    let names: Vec<&str> = successful.iter().map(|v| v.key()).collect();
    out.push_str(&format!(
        "✅ Successfully tested model types: {}\n",
        names.join(", ")
    ));
    out.push_str("\n🎯 Choose the best model type based on your use case:\n");
    out.push_str("• Base: For creative, open-ended tasks\n");
    out.push_str("• Instruct: For structured, task-oriented responses\n");
    out.push_str("• Fine-tuned: For specialized domain tasks\n");
    out
}

/// Overview of every variant, shown by `--info`.
pub fn render_model_info() -> String {
    let mut out = String::from("\n📚 MODEL TYPE INFORMATION\n");
    out.push_str(&"=".repeat(RULE));
    out.push('\n');

    for variant in ModelVariant::ALL {
        out.push_str(&format!("\n🔹 {} MODELS\n", variant.label()));
        out.push_str(&describe_characteristics(variant.characteristics()));
    }
    out
}

/// File name used when no explicit path is given.
pub fn default_report_filename(unix_seconds: i64) -> String {
    format!("comparison_results_{}.json", unix_seconds)
}

/// [`default_report_filename`] for the current time.
pub fn timestamped_report_filename() -> String {
    default_report_filename(chrono::Utc::now().timestamp())
}

/// Render the report as the pretty-printed JSON document written by
/// [`save_report`].
pub fn report_json(report: &ComparisonReport, timestamp: f64) -> Result<String, serde_json::Error> {
    let saved = SavedReport {
        prompt: &report.prompt,
        timestamp,
        results: VariantMap(
            report
                .results
                .iter()
                .map(|result| (result.model_type, result))
                .collect(),
        ),
        model_characteristics: VariantMap(
            ModelVariant::ALL
                .iter()
                .map(|variant| (*variant, variant.characteristics()))
                .collect(),
        ),
    };
    serde_json::to_string_pretty(&saved)
}

/// Write the report to `path`, stamped with the current time.
pub fn save_report(report: &ComparisonReport, path: &Path) -> Result<(), ReckonError> {
    let now = chrono::Utc::now();
    let timestamp = now.timestamp_micros() as f64 / 1_000_000.0;
    let contents = report_json(report, timestamp)?;
    std::fs::write(path, contents)?;
    info!(path = %path.display(), "saved comparison report");
    Ok(())
}
