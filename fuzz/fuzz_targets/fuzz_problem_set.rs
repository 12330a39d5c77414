//! Fuzz target for the problem set reader and renderers.
//!
//! Goal: reading and rendering a problem set should **never panic** on any input.
//! Invalid documents are rejected with errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_problem_set
//! ```

#![no_main]

use configtrace_app::{ReportInput, run_report};
use configtrace_settings::Overrides;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for format in ["text", "markdown", "github"] {
        let _ = run_report(ReportInput {
            input_json: text,
            config_text: "",
            overrides: Overrides {
                format: Some(format.to_string()),
                ..Overrides::default()
            },
        });
    }
});
