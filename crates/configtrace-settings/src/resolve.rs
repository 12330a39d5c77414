use crate::{model::ConfigtraceConfigV1, presets};
use anyhow::Context;
use configtrace_render::{OutputFormat, RenderOptions};
use configtrace_types::ids::SCHEMA_CONFIG_V1;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub format: Option<String>,
    pub max_problems: Option<u32>,
    pub dedupe: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub profile: String,
    pub format: OutputFormat,
    /// `None` renders every problem.
    pub max_problems: Option<usize>,
    pub dedupe: bool,
    pub options: RenderOptions,
}

pub fn resolve_config(
    cfg: ConfigtraceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected '{SCHEMA_CONFIG_V1}')");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "console".to_string());
    let profile = parse_profile(&profile)?;

    let mut effective = presets::preset(profile);

    if let Some(format_s) = overrides.format.clone().or(cfg.format.clone()) {
        effective.format = parse_format(&format_s).context("invalid format setting")?;
    }

    if let Some(mp) = overrides.max_problems.or(cfg.max_problems) {
        effective.max_problems = Some(mp as usize);
    }

    if let Some(dedupe) = overrides.dedupe.or(cfg.dedupe) {
        effective.dedupe = dedupe;
    }

    effective.options = RenderOptions {
        group_by_user_code: cfg
            .group_by_user_code
            .unwrap_or(effective.options.group_by_user_code),
        show_failures: cfg.show_failures.unwrap_or(effective.options.show_failures),
    };

    Ok(effective)
}

fn parse_profile(v: &str) -> anyhow::Result<&'static str> {
    match v {
        "console" => Ok("console"),
        "ci" => Ok("ci"),
        "report" => Ok("report"),
        other => anyhow::bail!("unknown profile: {other} (expected console|ci|report)"),
    }
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "github" | "gha" => Ok(OutputFormat::Github),
        other => anyhow::bail!("unknown format: {other} (expected text|markdown|github)"),
    }
}
