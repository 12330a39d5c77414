//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::ConfigtraceConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `configtrace.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ConfigtraceConfigV1> {
    let cfg: ConfigtraceConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective render policy (profile + config + overrides).
pub fn resolve_config(
    cfg: ConfigtraceConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
