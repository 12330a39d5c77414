use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `configtrace.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigtraceConfigV1 {
    /// Optional schema string for tooling (`configtrace.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `console` (default), `ci`, or `report`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Output format: `text`, `markdown`, or `github`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// How many problems to render before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_problems: Option<u32>,

    /// Drop problems equal to one already seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedupe: Option<bool>,

    /// Group problems under the plugin or script that owns them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by_user_code: Option<bool>,

    /// Include exception and stack trace detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_failures: Option<bool>,
}
