//! Literal sample data shown by the demo video. Nothing here is measured.

/// One row of the sample benchmark report.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BenchmarkRow {
    /// Model display name.
    pub name: &'static str,
    /// Vendor.
    pub provider: &'static str,
    /// Accuracy out of 100.
    pub accuracy: u8,
    /// Mean latency in seconds.
    pub latency_secs: f64,
    /// Cost per query, preformatted.
    pub cost: &'static str,
    /// Overall score out of 100.
    pub score: f64,
}

const fn row(
    name: &'static str,
    provider: &'static str,
    accuracy: u8,
    latency_secs: f64,
    cost: &'static str,
    score: f64,
) -> BenchmarkRow {
    BenchmarkRow {
        name,
        provider,
        accuracy,
        latency_secs,
        cost,
        score,
    }
}

/// Ranked sample results, best first. Row 0 is the recommended model.
pub const BENCHMARK_ROWS: [BenchmarkRow; 10] = [
    row("Claude 3.5 Sonnet", "Anthropic", 96, 1.8, "$0.0045", 94.2),
    row("GPT-4o", "OpenAI", 97, 2.1, "$0.0089", 89.1),
    row("Gemini 2.0 Pro", "Google", 93, 1.4, "$0.0038", 88.7),
    row("DeepSeek V3", "DeepSeek", 92, 2.8, "$0.0014", 87.3),
    row("Claude 3.5 Haiku", "Anthropic", 88, 0.6, "$0.0008", 86.1),
    row("Mistral Large", "Mistral", 90, 1.9, "$0.0036", 84.5),
    row("GPT-4o-mini", "OpenAI", 87, 0.9, "$0.0006", 83.9),
    row("Qwen 2.5 72B", "Alibaba", 89, 2.4, "$0.0018", 82.1),
    row("Gemini 2.0 Flash", "Google", 84, 0.5, "$0.0003", 81.4),
    row("Llama 3.3 70B", "Meta", 86, 1.7, "$0.0012", 80.2),
];

/// Models ticked off in the selection scene, in display order.
pub const SELECTABLE_MODELS: [&str; 20] = [
    "GPT-4.5",
    "GPT-4o",
    "GPT-4o-mini",
    "Claude 3 Opus",
    "Claude 3.5 Sonnet",
    "Claude 3.5 Haiku",
    "Gemini Ultra",
    "Gemini Pro",
    "Gemini Flash",
    "DeepSeek R1",
    "DeepSeek V3",
    "Mistral Large",
    "Mistral Small",
    "Llama 3.3 70B",
    "Llama 3.3 8B",
    "Command R+",
    "Qwen 2.5 72B",
    "Mixtral 8x22B",
    "Gemma 2 27B",
    "Phi-3 Medium",
];

/// Prompt typed out in the input scene.
pub const PROMPT_TEXT: &str = "Extract structured product data from the following product listing text. Return valid JSON matching this schema:
{
  \"name\": string,
  \"brand\": string,
  \"price\": number,
  \"category\": string,
  \"features\": string[]
}";

/// Expected output typed out under the prompt.
pub const EXPECTED_OUTPUT_TEXT: &str = "{
  \"name\": \"WH-1000XM5\",
  \"brand\": \"Sony\",
  \"price\": 279.99,
  \"category\": \"Headphones\"
}";

/// Savings line under the results table.
pub const SAVINGS_CALLOUT: &str = "Switch from GPT-4o → save $132/mo at 1,000 queries/day";
