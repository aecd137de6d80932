use serde::Serialize;

/// A Claude model offered in the settings picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const KNOWN_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "anthropic.claude-opus-4-5-20251101-v1:0",
        name: "Claude Opus 4.5",
        description: "Most powerful and intelligent model",
    },
    ModelInfo {
        id: "anthropic.claude-sonnet-4-5-20250929-v1:0",
        name: "Claude Sonnet 4.5",
        description: "Advanced balanced model",
    },
    ModelInfo {
        id: "anthropic.claude-opus-4-1-20250805-v1:0",
        name: "Claude Opus 4.1",
        description: "Powerful reasoning model",
    },
    ModelInfo {
        id: "anthropic.claude-opus-4-20250514-v1:0",
        name: "Claude Opus 4",
        description: "Strong performance model",
    },
    ModelInfo {
        id: "anthropic.claude-sonnet-4-20250514-v1:0",
        name: "Claude Sonnet 4",
        description: "Balanced performance and speed",
    },
    ModelInfo {
        id: "us.anthropic.claude-3-7-sonnet-20250219-v1:0",
        name: "Claude 3.7 Sonnet",
        description: "Latest generation 3 model (default)",
    },
    ModelInfo {
        id: "anthropic.claude-3-5-sonnet-20241022-v2:0",
        name: "Claude 3.5 Sonnet v2",
        description: "Previous generation model",
    },
];

/// The fixed catalog of model identifiers the frontend can choose from.
///
/// This is static data, not a live `ListFoundationModels` lookup.
pub fn known_models() -> &'static [ModelInfo] {
    KNOWN_MODELS
}
