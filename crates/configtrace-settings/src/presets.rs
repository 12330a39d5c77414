use configtrace_render::{OutputFormat, RenderOptions};

use crate::ResolvedConfig;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> ResolvedConfig {
    match profile {
        "ci" => ci_profile(),
        "report" => report_profile(),
        // default
        _ => console_profile(),
    }
}

fn console_profile() -> ResolvedConfig {
    ResolvedConfig {
        profile: "console".to_string(),
        format: OutputFormat::Text,
        max_problems: Some(512),
        dedupe: true,
        options: RenderOptions {
            group_by_user_code: false,
            show_failures: true,
        },
    }
}

fn ci_profile() -> ResolvedConfig {
    // Annotations are capped by the CI host, so keep the list short.
    ResolvedConfig {
        profile: "ci".to_string(),
        format: OutputFormat::Github,
        max_problems: Some(50),
        dedupe: true,
        options: RenderOptions {
            group_by_user_code: false,
            show_failures: false,
        },
    }
}

fn report_profile() -> ResolvedConfig {
    ResolvedConfig {
        profile: "report".to_string(),
        format: OutputFormat::Markdown,
        max_problems: None,
        dedupe: true,
        options: RenderOptions {
            group_by_user_code: true,
            show_failures: true,
        },
    }
}
